use crate::list_manager::ListView;
use std::io::Write;
use tracing::warn;

/// Console rendering for the list manager.
///
/// `ListView` has no error channel, so write failures are logged and
/// otherwise ignored.
#[derive(Debug)]
pub struct ConsoleListView<W> {
    out: W,
}

impl<W: Write> ConsoleListView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %err, "Failed to write list view output");
        }
    }
}

impl<W: Write> ListView for ConsoleListView<W> {
    fn display_items(&mut self, items: &[String]) {
        let mut text = String::from("--- Your List ---\n");
        if items.is_empty() {
            text.push_str("The list is empty.\n");
        } else {
            for item in items {
                text.push_str(&format!("- {}\n", item));
            }
        }
        text.push_str("-----------------\n\n");
        self.emit(&text);
    }

    fn display_message(&mut self, message: &str) {
        self.emit(&format!("STATUS: {}\n\n", message));
    }
}
