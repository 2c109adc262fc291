//! Contact model representing a person in the contact book.

use crate::domain::ContactId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact in the contact book.
///
/// The `id` is fixed at creation; `name` and `email` may be changed through
/// the contact service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: ContactId,

    /// Display name, never empty once stored through the service
    pub name: String,

    /// Optional email address, unique across the book when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the contact was created
    pub created_at: DateTime<Utc>,

    /// When the contact was last changed
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a contact with the given ID, stamped with the current time.
    pub fn new(id: ContactId, name: impl Into<String>, email: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this contact's email equals `email`.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }

    /// Replace name and email and refresh `updated_at`.
    pub fn apply_changes(&mut self, name: impl Into<String>, email: Option<String>) {
        self.name = name.into();
        self.email = email;
        self.updated_at = Utc::now();
    }
}
