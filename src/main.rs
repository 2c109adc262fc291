//! Contact Book - Main entry point
//!
//! Runs the interactive contact book, or one of the scripted demos.

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_book::app::{self, run_contact_demo, run_list_demo};
use contact_book::presentation::ConsoleListView;
use contact_book::{Config, ItemList, ListController};
use std::io;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contact-book")]
#[command(about = "In-memory contact book and MVC list demo")]
struct Args {
    /// Never clear the terminal before redrawing
    #[arg(long)]
    no_clear: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Mode {
    /// Read commands from stdin (default)
    Interactive,
    /// Replay the scripted contact book walkthrough
    Demo,
    /// Replay the MVC list manager walkthrough
    ListDemo,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if args.no_clear {
        config.clear_screen = false;
    }

    // Logging goes to stderr; stdout belongs to the views
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(?config, "Configuration loaded");

    let result = match args.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => {
            app::run_interactive(&config, io::stdin().lock(), io::stdout(), io::stdout())
        }
        Mode::Demo => {
            let (service, view) = app::build_contact_book(io::stdout(), config.clear_screen);
            println!("Initializing...");
            view.display_contacts(&service.get_all_contacts()?)?;
            run_contact_demo(
                service.as_ref(),
                &mut io::stdout(),
                Duration::from_millis(config.demo_delay_ms),
            )
        }
        Mode::ListDemo => {
            let view = ConsoleListView::new(io::stdout());
            let mut controller = ListController::new(ItemList::new(), view);
            run_list_demo(&mut controller, &mut io::stdout())
        }
    };

    if let Err(ref e) = result {
        error!("Contact book stopped with an error: {}", e);
    }
    result
}
