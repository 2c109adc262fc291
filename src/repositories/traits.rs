use crate::domain::ContactId;
use crate::error::RepositoryResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so the backend can be swapped
/// (in-memory, file, database) without touching business logic. The
/// repository enforces no uniqueness rules; that is the service's job.
pub trait ContactRepository: Send + Sync {
    /// Insert a contact keyed by its ID, overwriting any existing entry.
    fn add(&self, contact: Contact) -> RepositoryResult<()>;

    /// Retrieve a single contact by ID, `None` if absent.
    fn get(&self, id: &ContactId) -> RepositoryResult<Option<Contact>>;

    /// Retrieve a copy of every stored contact.
    ///
    /// Order is backend-defined but stable within a session.
    fn list(&self) -> RepositoryResult<Vec<Contact>>;

    /// Replace the entry at `contact.id`. Absent IDs are ignored.
    fn update(&self, contact: Contact) -> RepositoryResult<()>;

    /// Remove a contact. Absent IDs are ignored.
    fn delete(&self, id: &ContactId) -> RepositoryResult<()>;
}
