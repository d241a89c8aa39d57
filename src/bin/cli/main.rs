mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lexicard", about = "Language flashcard deck CLI and study TUI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show the deck: card count, tags, and every card
    List,

    /// Add a card to the deck
    Add {
        /// Term shown on the front of the card
        term: String,
        /// Answer revealed on flip
        answer: String,
        /// Short tag, e.g. a language code
        #[arg(long)]
        tag: Option<String>,
    },

    /// Shuffle the deck into a new persisted order
    Shuffle,

    /// Replace the deck with the built-in starter deck
    Reset,

    /// Write the deck as JSON (default file: lexicard_deck.json)
    Export {
        /// Output path (use "-" for stdout)
        path: Option<PathBuf>,
    },

    /// Replace the deck with cards from a JSON file
    Import {
        /// Path to a JSON array of {term, answer, tag?} objects (use "-" for stdin)
        path: PathBuf,
    },

    /// Launch the interactive study TUI
    #[cfg(feature = "tui")]
    Study,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(cli.data_dir.as_deref())?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Add { term, answer, tag }) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::add::run(&mut app, &term, &answer, tag.as_deref(), &cli.format)?;
        }
        Some(Command::Shuffle) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::shuffle::run(&mut app)?;
        }
        Some(Command::Reset) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::reset::run(&mut app)?;
        }
        Some(Command::Export { path }) => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::export::run(&app, path.as_deref())?;
        }
        Some(Command::Import { path }) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::import::run(&mut app, &path)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Study) => {
            tui::run(cli.data_dir.as_deref())?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
