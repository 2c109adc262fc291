use crate::domain::ContactId;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use indexmap::IndexMap;
use std::sync::RwLock;
use tracing::debug;

/// Contact repository that keeps everything in process memory.
///
/// Entries are listed in insertion order. Overwriting an existing ID keeps
/// its original position; deleting shifts later entries up.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<IndexMap<ContactId, Contact>>,
}

impl InMemoryContactRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Whether the repository holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add(&self, contact: Contact) -> RepositoryResult<()> {
        let mut contacts = self
            .contacts
            .write()
            .map_err(|_| RepositoryError::Poisoned)?;
        debug!(contact_id = %contact.id, "Storing contact");
        contacts.insert(contact.id, contact);
        Ok(())
    }

    fn get(&self, id: &ContactId) -> RepositoryResult<Option<Contact>> {
        let contacts = self.contacts.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(contacts.get(id).cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<Contact>> {
        let contacts = self.contacts.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(contacts.values().cloned().collect())
    }

    fn update(&self, contact: Contact) -> RepositoryResult<()> {
        let mut contacts = self
            .contacts
            .write()
            .map_err(|_| RepositoryError::Poisoned)?;
        match contacts.get_mut(&contact.id) {
            Some(slot) => {
                debug!(contact_id = %contact.id, "Replacing contact");
                *slot = contact;
            }
            None => debug!(contact_id = %contact.id, "Update ignored, contact absent"),
        }
        Ok(())
    }

    fn delete(&self, id: &ContactId) -> RepositoryResult<()> {
        let mut contacts = self
            .contacts
            .write()
            .map_err(|_| RepositoryError::Poisoned)?;
        if contacts.shift_remove(id).is_some() {
            debug!(contact_id = %id, "Deleted contact");
        }
        Ok(())
    }
}
