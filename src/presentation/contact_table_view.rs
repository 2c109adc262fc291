//! Table view of the contact book.

use super::CLEAR_SCREEN;
use crate::error::ObserverResult;
use crate::models::Contact;
use crate::observer::Observer;
use crate::services::ContactService;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

const TITLE: &str = "===== Contact Book =====";
const EMPTY: &str = "No contacts found.";
const MISSING_EMAIL: &str = "N/A";

/// Write the contact table to `out`.
///
/// Rows are numbered from 1 in the order given; those numbers are what the
/// controller accepts when selecting a contact.
pub fn render_contact_table<W: Write + ?Sized>(
    out: &mut W,
    contacts: &[Contact],
    clear_screen: bool,
) -> io::Result<()> {
    if clear_screen {
        write!(out, "{}", CLEAR_SCREEN)?;
    }

    writeln!(out, "{}", TITLE)?;
    if contacts.is_empty() {
        writeln!(out, "{}", EMPTY)?;
    } else {
        writeln!(out, "{:<5} | {:<20} | {:<30}", "ID", "Name", "Email")?;
        writeln!(out, "{}", "-".repeat(60))?;
        for (row, contact) in contacts.iter().enumerate() {
            let email = contact.email.as_deref().unwrap_or(MISSING_EMAIL);
            writeln!(out, "{:<5} | {:<20} | {:<30}", row + 1, contact.name, email)?;
        }
    }
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    out.flush()
}

/// Console view that redraws the contact table whenever the service changes.
pub struct ContactTableView<W> {
    out: Mutex<W>,
    clear_screen: bool,
}

impl<W: Write + Send> ContactTableView<W> {
    /// Create a view writing to `out`.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self {
            out: Mutex::new(out),
            clear_screen,
        }
    }

    /// Draw the given contacts.
    pub fn display_contacts(&self, contacts: &[Contact]) -> io::Result<()> {
        let mut out = self.lock();
        render_contact_table(&mut *out, contacts, self.clear_screen)
    }

    /// Print a single status line.
    pub fn display_message(&self, message: &str) -> io::Result<()> {
        let mut out = self.lock();
        writeln!(out, "{}", message)?;
        out.flush()
    }

    /// Re-read the subject and draw it.
    pub fn refresh(&self, service: &dyn ContactService) -> ObserverResult {
        let contacts = service.get_all_contacts()?;
        self.display_contacts(&contacts)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Observer<dyn ContactService> for ContactTableView<W> {
    fn update(&self, subject: &dyn ContactService) -> ObserverResult {
        debug!("Contact view refreshing");
        self.display_message("\nChange detected, refreshing view...")?;
        self.refresh(subject)
    }
}
