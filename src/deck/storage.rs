//! Durable storage for the deck
//!
//! The whole deck is persisted as one JSON array under a single fixed key in
//! a [`SlotStore`]. Production code backs the slot with one file per key
//! under the data directory:
//! ```text
//! ~/.local/share/lexicard/
//! └── lexicard_deck_v1.json   # The serialized deck
//! ```
//! Tests back it with an in-memory map.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::Card;
use super::seed::seed_deck;

/// Fixed key of the slot holding the serialized deck.
pub const DECK_SLOT_KEY: &str = "lexicard_deck_v1";

#[derive(Error, Debug)]
pub enum DeckStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, DeckStoreError>;

/// A single durable key-value slot.
///
/// `get` returns the last value stored under a key, `set` overwrites it.
/// Within one process a read after a successful write observes the written
/// value; file-backed implementations also survive restarts.
pub trait SlotStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed slot store: one `{key}.json` file per key under a base
/// directory.
pub struct FileSlot {
    base_dir: PathBuf,
}

impl FileSlot {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("lexicard"))
            .ok_or(DeckStoreError::DataDirNotFound)
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl SlotStore for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

/// In-memory slot store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemorySlot {
    slots: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage manager for the deck
pub struct DeckStore {
    slot: Box<dyn SlotStore>,
}

impl DeckStore {
    pub fn new(slot: Box<dyn SlotStore>) -> Self {
        Self { slot }
    }

    /// Open a file-backed store under the given directory
    pub fn open(base_dir: PathBuf) -> Self {
        Self::new(Box::new(FileSlot::new(base_dir)))
    }

    /// Open a file-backed store under the default data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(FileSlot::default_data_dir()?))
    }

    /// Load the persisted deck.
    ///
    /// Falls back to a fresh seed copy when the slot is absent, unreadable,
    /// or does not parse as a card array. The fallback never fails and is
    /// only reported through the log.
    pub fn load(&self) -> Vec<Card> {
        match self.slot.get(DECK_SLOT_KEY) {
            Ok(Some(content)) => match serde_json::from_str(&content) {
                Ok(cards) => cards,
                Err(e) => {
                    log::warn!("Persisted deck is not parsable, using seed deck: {}", e);
                    seed_deck()
                }
            },
            Ok(None) => seed_deck(),
            Err(e) => {
                log::warn!("Failed to read persisted deck, using seed deck: {}", e);
                seed_deck()
            }
        }
    }

    /// Persist the full deck, replacing any previous value
    pub fn save(&mut self, cards: &[Card]) -> Result<()> {
        let content = serde_json::to_string_pretty(cards)?;
        self.slot.set(DECK_SLOT_KEY, &content)
    }

    /// Persist a fresh seed copy and return it
    pub fn reset(&mut self) -> Result<Vec<Card>> {
        let cards = seed_deck();
        self.save(&cards)?;
        Ok(cards)
    }
}
