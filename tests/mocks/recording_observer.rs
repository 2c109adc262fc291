use contact_book::error::{ObserverError, ObserverResult};
use contact_book::models::Contact;
use contact_book::observer::Observer;
use contact_book::services::ContactService;
use std::sync::Mutex;

/// Observer that records every notification and the contact list it saw.
#[derive(Default)]
pub struct RecordingObserver {
    snapshots: Mutex<Vec<Vec<Contact>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received.
    pub fn calls(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    /// The contact list read during the most recent notification.
    pub fn last_snapshot(&self) -> Option<Vec<Contact>> {
        self.snapshots.lock().unwrap().last().cloned()
    }
}

impl Observer<dyn ContactService> for RecordingObserver {
    fn update(&self, subject: &dyn ContactService) -> ObserverResult {
        let contacts = subject.get_all_contacts()?;
        self.snapshots.lock().unwrap().push(contacts);
        Ok(())
    }
}

/// Observer that always fails, counting how often it was asked.
#[derive(Default)]
pub struct FailingObserver {
    calls: Mutex<usize>,
}

impl FailingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Observer<dyn ContactService> for FailingObserver {
    fn update(&self, _subject: &dyn ContactService) -> ObserverResult {
        *self.calls.lock().unwrap() += 1;
        Err(ObserverError::Other("display unavailable".to_string()))
    }
}
