//! The built-in starter deck

use super::models::Card;

/// Build a fresh copy of the starter deck.
///
/// Used whenever no usable persisted deck exists. Each call constructs new
/// cards, so a caller can never mutate a shared copy.
pub fn seed_deck() -> Vec<Card> {
    vec![
        Card::new("こんにちは", "Hello (Japanese)").with_tag("JP"),
        Card::new("hola", "hello (Spanish)").with_tag("ES"),
        Card::new("bonjour", "hello (French)").with_tag("FR"),
        Card::new("guten Tag", "good day (German)").with_tag("DE"),
        Card::new("ciao", "hi/bye (Italian)").with_tag("IT"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_deck_shape() {
        let deck = seed_deck();

        assert_eq!(deck.len(), 5);
        assert_eq!(deck[0].term, "こんにちは");
        assert_eq!(deck[0].answer, "Hello (Japanese)");
        assert_eq!(deck[0].tag.as_deref(), Some("JP"));
        assert!(deck.iter().all(|c| c.tag.is_some()));
    }

    #[test]
    fn test_seed_deck_returns_fresh_copies() {
        let mut first = seed_deck();
        first[0].term = "edited".to_string();

        assert_eq!(seed_deck()[0].term, "こんにちは");
    }
}
