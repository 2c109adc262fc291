//! Scripted demonstrations.

use crate::list_manager::{ListController, ListView};
use crate::services::ContactService;
use anyhow::Result;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Replay the contact book walkthrough against `service`.
///
/// Adds Alice and Bob, renames Alice, deletes Bob. Views attached to the
/// service redraw after every step; `narration` receives the step headings.
pub fn run_contact_demo<W: Write>(
    service: &dyn ContactService,
    narration: &mut W,
    delay: Duration,
) -> Result<()> {
    let pause = || {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    };

    writeln!(narration, "\nAdding a new contact: Alice...")?;
    let alice = service.add_contact("Alice", Some("alice@example.com"))?;
    pause();

    writeln!(narration, "\nAdding a new contact: Bob...")?;
    let bob = service.add_contact("Bob", None)?;
    pause();

    writeln!(narration, "\nUpdating Alice's name...")?;
    service.update_contact(&alice.id, "Alice Smith", Some("asmith@example.com"))?;
    pause();

    writeln!(narration, "\nDeleting Bob...")?;
    service.delete_contact(&bob.id)?;
    pause();

    writeln!(narration, "\nDemonstration finished.")?;
    info!("Contact demo finished");
    Ok(())
}

/// Replay the list manager walkthrough, including a duplicate add and a
/// removal of a missing item.
pub fn run_list_demo<V: ListView, W: Write>(
    controller: &mut ListController<V>,
    narration: &mut W,
) -> Result<()> {
    writeln!(narration, "--- MVC Application Start ---")?;

    controller.update_view();
    controller.add_item_to_list("Buy groceries");
    controller.add_item_to_list("Read a book on design patterns");
    controller.add_item_to_list("Buy groceries");
    controller.remove_item_from_list("Read a book on design patterns");
    controller.remove_item_from_list("Go to the gym");

    writeln!(narration, "--- MVC Application End ---")?;
    info!("List demo finished");
    Ok(())
}
