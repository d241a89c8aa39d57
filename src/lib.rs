//! Flashcard deck management with single-slot persistence
//!
//! The library half of lexicard: [`deck`] holds the card model, the starter
//! deck, durable storage, and JSON transfer; [`study`] holds the interactive
//! session state (cursor, card face, deck mutations) the CLI and TUI run on.

pub mod deck;
pub mod study;
