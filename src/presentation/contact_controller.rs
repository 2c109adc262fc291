//! Line-oriented console controller for the contact book.

use super::contact_table_view::render_contact_table;
use crate::models::Contact;
use crate::services::ContactService;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::sync::Arc;
use tracing::debug;

const PROMPT: &str = "Enter command (add, update, delete, list, help, exit): ";

const HELP: &str = "\
Commands:
  add          create a contact
  update       change the name and email of a contact
  delete       remove a contact
  list         redraw the table (list --json prints JSON)
  help         show this text
  exit, quit   leave the program";

/// A parsed controller command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Update,
    Delete,
    List { json: bool },
    Help,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Matching is case-insensitive.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Empty;
        };
        match head.to_lowercase().as_str() {
            "add" => Command::Add,
            "update" => Command::Update,
            "delete" => Command::Delete,
            "list" => Command::List {
                json: words.any(|w| w == "--json"),
            },
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(head.to_string()),
        }
    }
}

/// Reads commands from `input` and drives a [`ContactService`].
///
/// Changes are shown by whatever views observe the service; the controller
/// itself only writes prompts, errors and explicit `list` output to
/// `output`.
pub struct ContactController<R, W> {
    service: Arc<dyn ContactService>,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ContactController<R, W> {
    pub fn new(service: Arc<dyn ContactService>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the screen before the `list` table.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Consume the controller and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while let Some(line) = self.prompt(PROMPT)? {
            if self.handle_command(Command::parse(&line))?.is_break() {
                break;
            }
        }
        debug!("Controller loop finished");
        Ok(())
    }

    /// Execute one command.
    pub fn handle_command(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Add => self.add()?,
            Command::Update => self.update()?,
            Command::Delete => self.delete()?,
            Command::List { json } => self.list(json)?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Exit => return Ok(ControlFlow::Break(())),
            Command::Empty => {}
            Command::Unknown(word) => writeln!(
                self.output,
                "Unknown command '{}'. Type 'help' for a list of commands.",
                word
            )?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Email (blank for none): ")? else {
            return Ok(());
        };

        if let Err(err) = self.service.add_contact(name.trim(), optional(&email)) {
            self.error(&err)?;
        }
        Ok(())
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(contact) = self.select_contact()? else {
            return Ok(());
        };
        let Some(name) = self.prompt("New name: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("New email (blank for none): ")? else {
            return Ok(());
        };

        if let Err(err) = self
            .service
            .update_contact(&contact.id, name.trim(), optional(&email))
        {
            self.error(&err)?;
        }
        Ok(())
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(contact) = self.select_contact()? else {
            return Ok(());
        };
        if let Err(err) = self.service.delete_contact(&contact.id) {
            self.error(&err)?;
        }
        Ok(())
    }

    fn list(&mut self, json: bool) -> io::Result<()> {
        let contacts = match self.service.get_all_contacts() {
            Ok(contacts) => contacts,
            Err(err) => return self.error(&err),
        };
        if json {
            let text = serde_json::to_string_pretty(&contacts)?;
            writeln!(self.output, "{}", text)?;
            return Ok(());
        }
        render_contact_table(&mut self.output, &contacts, self.clear_screen)
    }

    /// Ask for a 1-based row number and resolve it against the current list.
    fn select_contact(&mut self) -> io::Result<Option<Contact>> {
        let Some(answer) = self.prompt("Row number: ")? else {
            return Ok(None);
        };
        let row = match answer.trim().parse::<usize>() {
            Ok(row) if row >= 1 => row,
            _ => {
                writeln!(self.output, "Error: invalid row number '{}'", answer.trim())?;
                return Ok(None);
            }
        };

        let contacts = match self.service.get_all_contacts() {
            Ok(contacts) => contacts,
            Err(err) => {
                self.error(&err)?;
                return Ok(None);
            }
        };
        match contacts.into_iter().nth(row - 1) {
            Some(contact) => Ok(Some(contact)),
            None => {
                writeln!(self.output, "Error: no contact at row {}", row)?;
                Ok(None)
            }
        }
    }

    /// Print `label` and read one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn error(&mut self, err: &dyn std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "Error: {}", err)
    }
}

/// Blank answers mean "no value".
fn optional(answer: &str) -> Option<&str> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("add"), Command::Add);
        assert_eq!(Command::parse("  UPDATE "), Command::Update);
        assert_eq!(Command::parse("delete"), Command::Delete);
        assert_eq!(Command::parse("list"), Command::List { json: false });
        assert_eq!(Command::parse("list --json"), Command::List { json: true });
        assert_eq!(
            Command::parse("find"),
            Command::Unknown("find".to_string())
        );
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Exit);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(
            Command::parse("frobnicate now"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_optional_answer() {
        assert_eq!(optional(""), None);
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" a@x.com "), Some("a@x.com"));
    }
}
