//! Contact Book - the Repository and Observer patterns over an in-memory
//! contact store, plus a small Model-View-Controller list manager.
//!
//! # Architecture
//!
//! - **domain**: Value objects (contact IDs)
//! - **models**: The `Contact` entity
//! - **repositories**: Storage abstraction and the in-memory backend
//! - **observer**: Generic publish/subscribe primitives
//! - **services**: `ContactService`, validation plus change notification
//! - **presentation**: Console views and the command controller
//! - **list_manager**: The MVC list demo
//! - **app**: Composition root and scripted demos
//! - **config** / **error**: Environment configuration and error types

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod list_manager;
pub mod models;
pub mod observer;
pub mod presentation;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::ContactId;
pub use error::{ContactError, ContactResult, ObserverError, RepositoryError};
pub use list_manager::{ItemList, ListController, ListView};
pub use models::Contact;
pub use observer::{CallbackObserver, Observable, Observer};
pub use presentation::{ContactController, ContactTableView};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::{contact_observer, ContactObserver, ContactService, ContactServiceImpl};
