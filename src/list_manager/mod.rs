//! Model-View-Controller list manager.
//!
//! The model owns an ordered list of unique items, the view only displays
//! what it is handed, and the controller turns user actions into model calls
//! followed by a view refresh.

mod controller;
mod model;

pub use controller::{ListController, ListView};
pub use model::{AddOutcome, ItemList, RemoveOutcome};
