//! Whole-deck JSON import and export
//!
//! Export produces a pretty-printed array of `{term, answer, tag?}` objects
//! with `tag` omitted where absent. Import is strict about the top-level
//! shape (anything but an array is rejected) but lenient per entry: `term`
//! and `answer` are coerced to text, entries left with an empty side are
//! dropped, and tags are normalized like everywhere else.

use serde_json::Value;
use thiserror::Error;

use super::models::{normalize_tag, Card};

/// Default filename for exported decks.
pub const EXPORT_FILE_NAME: &str = "lexicard_deck.json";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array of cards, got {0}")]
    NotAnArray(&'static str),
}

/// Serialize a deck as pretty-printed JSON
pub fn export_json(cards: &[Card]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(cards)
}

/// Parse a deck from JSON text.
///
/// Fails only on top-level problems; entries that cannot be coerced into a
/// usable card are dropped silently. The result may be empty.
pub fn import_json(text: &str) -> Result<Vec<Card>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => return Err(ImportError::NotAnArray(json_type_name(&other))),
    };

    Ok(entries.iter().filter_map(coerce_card).collect())
}

/// Coerce one import entry into a card, if it has a usable term and answer
fn coerce_card(entry: &Value) -> Option<Card> {
    let term = text_field(entry, "term");
    let answer = text_field(entry, "answer");
    if term.is_empty() || answer.is_empty() {
        return None;
    }

    let mut card = Card::new(term, answer);
    card.tag = entry
        .get("tag")
        .and_then(Value::as_str)
        .and_then(normalize_tag);
    Some(card)
}

/// The string value of a field, or empty text when missing or not a string
fn text_field<'a>(entry: &'a Value, key: &str) -> &'a str {
    entry.get(key).and_then(Value::as_str).unwrap_or("")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
