//! Deck management: card model, seed deck, durable storage, JSON transfer
//!
//! This module provides:
//! - The card data model (term / answer / optional tag)
//! - The built-in starter deck
//! - Persistence of the whole deck in a single durable key-value slot
//! - Whole-deck import and export as JSON

pub mod models;
pub mod seed;
pub mod storage;
pub mod transfer;

pub use models::*;
pub use seed::seed_deck;
pub use storage::{DeckStore, DeckStoreError, FileSlot, MemorySlot, SlotStore, DECK_SLOT_KEY};
pub use transfer::{export_json, import_json, ImportError, EXPORT_FILE_NAME};
