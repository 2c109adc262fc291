//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories and the observers that present their state.

mod contact_service;

pub use contact_service::{
    contact_observer, ContactObserver, ContactService, ContactServiceImpl, EMAIL_EXISTS,
    NAME_REQUIRED,
};

// Re-export common types used by services
pub use crate::models::Contact;
