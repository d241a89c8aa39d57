//! Data models for the flashcard deck

use serde::{Deserialize, Serialize};

/// A single flashcard: the term shown first, the answer revealed on flip,
/// and an optional short tag (typically a language code)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub term: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Card {
    pub fn new(term: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            answer: answer.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Normalize a raw tag value: trim surrounding whitespace, and treat an
/// empty result as no tag at all.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

/// Distinct tags across the deck, in first-seen order.
pub fn distinct_tags(cards: &[Card]) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for card in cards {
        if let Some(tag) = card.tag.as_deref() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_omits_absent_tag() {
        let card = Card::new("hola", "hello (Spanish)");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["term"], "hola");
        assert_eq!(json["answer"], "hello (Spanish)");
        assert!(json.get("tag").is_none());
    }

    #[test]
    fn test_serialize_includes_tag() {
        let card = Card::new("hola", "hello (Spanish)").with_tag("ES");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["tag"], "ES");
    }

    #[test]
    fn test_deserialize_missing_tag() {
        let card: Card = serde_json::from_str(r#"{"term":"a","answer":"b"}"#).unwrap();
        assert_eq!(card.tag, None);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("ES"), Some("ES".to_string()));
        assert_eq!(normalize_tag("  FR  "), Some("FR".to_string()));
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn test_distinct_tags_first_seen_order() {
        let cards = vec![
            Card::new("a", "1").with_tag("JP"),
            Card::new("b", "2"),
            Card::new("c", "3").with_tag("ES"),
            Card::new("d", "4").with_tag("JP"),
        ];

        assert_eq!(distinct_tags(&cards), vec!["JP", "ES"]);
    }
}
