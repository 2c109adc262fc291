//! Contact service layer.
//!
//! Business logic for creating, editing and removing contacts. Every
//! successful mutation is followed by a notification to attached observers;
//! failed calls leave the repository untouched and notify nobody.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult, ObserverResult};
use crate::models::Contact;
use crate::observer::{CallbackObserver, Observable, Observer};
use crate::repositories::ContactRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Observer of a contact service.
pub type ContactObserver = dyn Observer<dyn ContactService>;

/// Wrap a closure as a contact observer.
///
/// ```
/// use std::sync::Arc;
/// use contact_book::repositories::InMemoryContactRepository;
/// use contact_book::services::{contact_observer, ContactService, ContactServiceImpl};
///
/// let service = ContactServiceImpl::new(Arc::new(InMemoryContactRepository::new()));
/// service.attach(contact_observer(|subject| {
///     assert_eq!(subject.get_all_contacts()?.len(), 1);
///     Ok(())
/// }));
/// service.add_contact("Alice", None).unwrap();
/// ```
pub fn contact_observer<F>(callback: F) -> Arc<ContactObserver>
where
    F: Fn(&(dyn ContactService + 'static)) -> ObserverResult + Send + Sync + 'static,
{
    Arc::new(CallbackObserver::new(callback))
}

/// Reason reported when a contact name is missing.
pub const NAME_REQUIRED: &str = "name required";

/// Reason reported when an email is already used by another contact.
pub const EMAIL_EXISTS: &str = "email exists";

/// Contact service trait for business operations.
///
/// Observers receive the service as `&dyn ContactService` and are expected
/// to re-read state through [`ContactService::get_all_contacts`].
pub trait ContactService: Send + Sync {
    /// Create a contact with a fresh ID.
    ///
    /// # Errors
    ///
    /// - `Validation("name required")` if `name` is empty.
    /// - `Validation("email exists")` if another contact already has `email`.
    fn add_contact(&self, name: &str, email: Option<&str>) -> ContactResult<Contact>;

    /// All contacts, straight from the repository.
    fn get_all_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// A single contact.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has `id`.
    fn get_contact(&self, id: &ContactId) -> ContactResult<Contact>;

    /// Delete a contact and notify observers.
    ///
    /// Deleting an unknown ID is not an error and still notifies.
    fn delete_contact(&self, id: &ContactId) -> ContactResult<()>;

    /// Replace name and email of an existing contact.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has `id`.
    /// - `Validation("name required")` if `name` is empty.
    /// - `Validation("email exists")` if the new email belongs to another contact.
    fn update_contact(
        &self,
        id: &ContactId,
        name: &str,
        email: Option<&str>,
    ) -> ContactResult<Contact>;

    /// Attach an observer. Returns `false` if it was already attached.
    fn attach(&self, observer: Arc<ContactObserver>) -> bool;

    /// Detach an observer. Returns `false` if it was not attached.
    fn detach(&self, observer: &Arc<ContactObserver>) -> bool;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    observers: Observable<dyn ContactService>,
}

/// Validation helper functions.
impl ContactServiceImpl {
    /// Validate a contact name.
    fn validate_name(name: &str) -> ContactResult<()> {
        if name.is_empty() {
            return Err(ContactError::validation(NAME_REQUIRED));
        }
        Ok(())
    }

    /// An empty email is treated as no email at all.
    fn normalize_email(email: Option<&str>) -> Option<String> {
        email.filter(|e| !e.is_empty()).map(str::to_string)
    }

    /// Fail if a contact other than `exclude` already uses `email`.
    fn ensure_email_free(&self, email: &str, exclude: Option<&ContactId>) -> ContactResult<()> {
        let taken = self
            .repository
            .list()?
            .iter()
            .any(|c| Some(&c.id) != exclude && c.has_email(email));
        if taken {
            return Err(ContactError::validation(EMAIL_EXISTS));
        }
        Ok(())
    }
}

impl ContactServiceImpl {
    /// Create a new contact service over the given repository.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            repository,
            observers: Observable::new(),
        }
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Broadcast a change. Observer failures are logged, never returned:
    /// the mutation that triggered them is already committed.
    fn notify_observers(&self) {
        if let Err(err) = self.observers.notify(self) {
            for (position, failure) in &err.failures {
                warn!(
                    observer = position,
                    error = %failure,
                    "Observer failed to handle contact change"
                );
            }
        }
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&self, name: &str, email: Option<&str>) -> ContactResult<Contact> {
        Self::validate_name(name)?;

        let email = Self::normalize_email(email);
        if let Some(ref address) = email {
            self.ensure_email_free(address, None)?;
        }

        let contact = Contact::new(ContactId::generate(), name, email);
        self.repository.add(contact.clone())?;
        info!(contact_id = %contact.id, "Contact added");

        self.notify_observers();
        Ok(contact)
    }

    fn get_all_contacts(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.repository.list()?)
    }

    fn get_contact(&self, id: &ContactId) -> ContactResult<Contact> {
        self.repository
            .get(id)?
            .ok_or(ContactError::NotFound { id: *id })
    }

    fn delete_contact(&self, id: &ContactId) -> ContactResult<()> {
        self.repository.delete(id)?;
        info!(contact_id = %id, "Contact deleted");

        self.notify_observers();
        Ok(())
    }

    fn update_contact(
        &self,
        id: &ContactId,
        name: &str,
        email: Option<&str>,
    ) -> ContactResult<Contact> {
        let mut contact = self.get_contact(id)?;
        Self::validate_name(name)?;

        let email = Self::normalize_email(email);
        if let Some(ref address) = email {
            if contact.email.as_ref() != Some(address) {
                self.ensure_email_free(address, Some(id))?;
            }
        }

        contact.apply_changes(name, email);
        self.repository.update(contact.clone())?;
        info!(contact_id = %id, "Contact updated");

        self.notify_observers();
        Ok(contact)
    }

    fn attach(&self, observer: Arc<ContactObserver>) -> bool {
        let added = self.observers.attach(observer);
        debug!(added, observers = self.observers.len(), "Observer attach");
        added
    }

    fn detach(&self, observer: &Arc<ContactObserver>) -> bool {
        let removed = self.observers.detach(observer);
        debug!(removed, observers = self.observers.len(), "Observer detach");
        removed
    }
}

impl std::fmt::Debug for ContactServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactServiceImpl")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
