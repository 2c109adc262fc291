use contact_book::domain::ContactId;
use contact_book::error::{RepositoryError, RepositoryResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Stores contacts in insertion order, tracks method calls for verification
/// and can be switched into a failing mode to simulate a broken backend.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed a contact without counting a call.
    pub fn seed(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Snapshot of stored contacts without counting a call.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every subsequent call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) -> RepositoryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
        if *self.failing.lock().unwrap() {
            return Err(RepositoryError::Storage("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&self, contact: Contact) -> RepositoryResult<()> {
        self.track_call("add")?;
        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact,
            None => contacts.push(contact),
        }
        Ok(())
    }

    fn get(&self, id: &ContactId) -> RepositoryResult<Option<Contact>> {
        self.track_call("get")?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| &c.id == id).cloned())
    }

    fn list(&self) -> RepositoryResult<Vec<Contact>> {
        self.track_call("list")?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    fn update(&self, contact: Contact) -> RepositoryResult<()> {
        self.track_call("update")?;
        let mut contacts = self.contacts.lock().unwrap();
        if let Some(slot) = contacts.iter_mut().find(|c| c.id == contact.id) {
            *slot = contact;
        }
        Ok(())
    }

    fn delete(&self, id: &ContactId) -> RepositoryResult<()> {
        self.track_call("delete")?;
        self.contacts.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }
}
