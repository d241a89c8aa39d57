use std::path::Path;

use anyhow::{Context, Result};

use lexicard::deck::DeckStore;
use lexicard::study::StudySession;

/// Shared application state for CLI commands
pub struct App {
    pub session: StudySession,
}

impl App {
    /// Open the persisted deck from the given directory, or the default
    /// data directory.
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let store = match data_dir {
            Some(dir) => DeckStore::open(dir.to_path_buf()),
            None => DeckStore::open_default().context("Failed to get data directory")?,
        };

        Ok(Self {
            session: StudySession::open(store),
        })
    }
}
