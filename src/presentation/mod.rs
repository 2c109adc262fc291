//! Console front ends.
//!
//! Thin text views and controllers over the contact service and the list
//! manager. Nothing here holds domain state; views re-read it on every
//! redraw.

mod contact_controller;
mod contact_table_view;
mod list_view;

pub use contact_controller::{Command, ContactController};
pub use contact_table_view::{render_contact_table, ContactTableView};
pub use list_view::ConsoleListView;

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
