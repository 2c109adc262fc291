//! Composition root for the console programs.
//!
//! Wires repository, service, views and controllers together and runs the
//! interactive session or one of the scripted demos.

mod demo;

pub use demo::{run_contact_demo, run_list_demo};

use crate::config::Config;
use crate::presentation::{ContactController, ContactTableView};
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use crate::services::{ContactObserver, ContactService, ContactServiceImpl};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::info;

/// A contact service over a fresh in-memory repository, with a table view
/// writing to `out` already attached.
pub fn build_contact_book<W>(
    out: W,
    clear_screen: bool,
) -> (Arc<dyn ContactService>, Arc<ContactTableView<W>>)
where
    W: Write + Send + 'static,
{
    let repository = Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    let view = Arc::new(ContactTableView::new(out, clear_screen));

    service.attach(view.clone() as Arc<ContactObserver>);
    (service, view)
}

/// Run the interactive contact book until the user exits or input ends.
pub fn run_interactive<R, W, V>(config: &Config, input: R, output: W, view_out: V) -> Result<()>
where
    R: BufRead,
    W: Write,
    V: Write + Send + 'static,
{
    let (service, view) = build_contact_book(view_out, config.clear_screen);

    // Initial empty table before the first command
    view.display_contacts(&service.get_all_contacts()?)?;

    let mut controller = ContactController::new(service, input, output)
        .with_clear_screen(config.clear_screen);

    info!("Starting interactive session");
    controller.run()?;
    info!("Interactive session finished");
    Ok(())
}
