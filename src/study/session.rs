//! Study session state
//!
//! A session owns the in-memory deck, the cursor position, and which face of
//! the current card is showing. Content mutations persist the whole deck
//! through the store before they report success; navigation and flipping are
//! memory-only and reset when the session ends.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::deck::models::{normalize_tag, Card};
use crate::deck::storage::{DeckStore, DeckStoreError};
use crate::deck::transfer::{self, ImportError};

/// Placeholder shown in place of a card face when the deck is empty.
pub const EMPTY_MARKER: &str = "—";

/// Which face of the current card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Term,
    Answer,
}

impl CardFace {
    pub fn label(&self) -> &'static str {
        match self {
            CardFace::Term => "Term",
            CardFace::Answer => "Answer",
        }
    }

    fn toggled(self) -> Self {
        match self {
            CardFace::Term => CardFace::Answer,
            CardFace::Answer => CardFace::Term,
        }
    }
}

/// Rejected card input: term or answer empty after trimming
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("term must not be empty")]
    EmptyTerm,

    #[error("answer must not be empty")]
    EmptyAnswer,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("storage error: {0}")]
    Store(#[from] DeckStoreError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Interactive state over a persisted deck
pub struct StudySession {
    store: DeckStore,
    cards: Vec<Card>,
    index: usize,
    face: CardFace,
}

impl StudySession {
    /// Open a session over the persisted deck (or the seed fallback)
    pub fn open(store: DeckStore) -> Self {
        let cards = store.load();
        Self {
            store,
            cards,
            index: 0,
            face: CardFace::Term,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// The card under the cursor, when the deck is non-empty
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    /// Text of the visible face, or the empty-deck marker
    pub fn visible_text(&self) -> &str {
        match self.current() {
            Some(card) => match self.face {
                CardFace::Term => &card.term,
                CardFace::Answer => &card.answer,
            },
            None => EMPTY_MARKER,
        }
    }

    /// 1-based display counter: cursor position clamped to the deck size,
    /// over a denominator floored at 1 (an empty deck reads "0/1").
    pub fn counter(&self) -> (usize, usize) {
        let total = self.cards.len();
        ((self.index + 1).min(total), total.max(1))
    }

    /// Toggle which face is showing.
    ///
    /// Toggles even on an empty deck; there is just nothing to reveal.
    pub fn flip(&mut self) {
        self.face = self.face.toggled();
    }

    /// Advance the cursor, wrapping past the last card. No-op when empty.
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.cards.len();
        self.face = CardFace::Term;
    }

    /// Step the cursor back, wrapping past the first card. No-op when empty.
    pub fn prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = (self.index + self.cards.len() - 1) % self.cards.len();
        self.face = CardFace::Term;
    }

    /// Shuffle the deck in place, park the cursor on the first card, and
    /// persist the new order.
    pub fn shuffle(&mut self) -> Result<()> {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Shuffle with a caller-supplied RNG (Fisher-Yates via `SliceRandom`)
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.cards.shuffle(rng);
        self.index = 0;
        self.face = CardFace::Term;
        self.store.save(&self.cards)?;
        Ok(())
    }

    /// Validate, append, and persist a new card, then park the cursor on it.
    ///
    /// Term and answer are trimmed; an empty side rejects the card without
    /// touching the deck. A failed persist rolls the append back.
    pub fn add_card(&mut self, term: &str, answer: &str, tag: Option<&str>) -> Result<Card> {
        let term = term.trim();
        let answer = answer.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptyTerm.into());
        }
        if answer.is_empty() {
            return Err(ValidationError::EmptyAnswer.into());
        }

        let mut card = Card::new(term, answer);
        card.tag = tag.and_then(normalize_tag);

        self.cards.push(card.clone());
        if let Err(e) = self.store.save(&self.cards) {
            self.cards.pop();
            return Err(e.into());
        }

        self.index = self.cards.len() - 1;
        self.face = CardFace::Term;
        Ok(card)
    }

    /// Replace the deck with a fresh seed copy and persist it
    pub fn reset(&mut self) -> Result<()> {
        self.cards = self.store.reset()?;
        self.index = 0;
        self.face = CardFace::Term;
        log::info!("Deck reset to the starter deck ({} cards)", self.cards.len());
        Ok(())
    }

    /// Replace the deck with cards parsed from JSON text and persist it.
    ///
    /// Returns the number of cards imported. The deck is untouched when the
    /// text is rejected or the persist fails.
    pub fn import(&mut self, text: &str) -> Result<usize> {
        let cards = transfer::import_json(text)?;
        self.store.save(&cards)?;

        self.cards = cards;
        self.index = 0;
        self.face = CardFace::Term;
        log::info!("Imported deck with {} cards", self.cards.len());
        Ok(self.cards.len())
    }

    /// The deck as pretty-printed export JSON
    pub fn export(&self) -> Result<String> {
        Ok(transfer::export_json(&self.cards).map_err(DeckStoreError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::seed::seed_deck;
    use crate::deck::storage::MemorySlot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn session_with(cards: Vec<Card>) -> StudySession {
        let mut store = DeckStore::new(Box::new(MemorySlot::new()));
        store.save(&cards).unwrap();
        StudySession::open(store)
    }

    fn seeded_session() -> StudySession {
        session_with(seed_deck())
    }

    fn sorted_terms(cards: &[Card]) -> Vec<String> {
        let mut terms: Vec<String> = cards.iter().map(|c| c.term.clone()).collect();
        terms.sort();
        terms
    }

    #[test]
    fn test_open_starts_on_first_term() {
        let session = seeded_session();

        assert_eq!(session.index(), 0);
        assert_eq!(session.face(), CardFace::Term);
        assert_eq!(session.visible_text(), "こんにちは");
        assert_eq!(session.counter(), (1, 5));
    }

    #[test]
    fn test_flip_toggles_face() {
        let mut session = seeded_session();

        session.flip();
        assert_eq!(session.face(), CardFace::Answer);
        assert_eq!(session.visible_text(), "Hello (Japanese)");

        session.flip();
        assert_eq!(session.face(), CardFace::Term);
        assert_eq!(session.visible_text(), "こんにちは");
    }

    #[test]
    fn test_flip_toggles_even_when_empty() {
        let mut session = session_with(Vec::new());

        assert_eq!(session.visible_text(), EMPTY_MARKER);
        session.flip();
        assert_eq!(session.face(), CardFace::Answer);
        assert_eq!(session.visible_text(), EMPTY_MARKER);
    }

    #[test]
    fn test_next_wraps_and_resets_face() {
        let mut session = seeded_session();

        for _ in 0..5 {
            session.next();
        }
        assert_eq!(session.index(), 0);

        session.flip();
        assert_eq!(session.face(), CardFace::Answer);

        session.next();
        assert_eq!(session.index(), 1);
        assert_eq!(session.face(), CardFace::Term);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut session = seeded_session();

        session.prev();
        assert_eq!(session.index(), 4);
        assert_eq!(session.counter(), (5, 5));
    }

    #[test]
    fn test_navigation_is_noop_when_empty() {
        let mut session = session_with(Vec::new());

        session.next();
        session.prev();

        assert_eq!(session.index(), 0);
        assert_eq!(session.counter(), (0, 1));
    }

    #[test]
    fn test_shuffle_keeps_cards_and_rewinds() {
        let mut session = seeded_session();
        let before = sorted_terms(session.cards());

        session.next();
        session.flip();
        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle_with(&mut rng).unwrap();

        assert_eq!(sorted_terms(session.cards()), before);
        assert_eq!(session.index(), 0);
        assert_eq!(session.face(), CardFace::Term);
        assert_eq!(session.len(), 5);
    }

    #[test]
    fn test_shuffle_persists_new_order() {
        let temp_dir = TempDir::new().unwrap();

        let mut session = StudySession::open(DeckStore::open(temp_dir.path().to_path_buf()));
        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle_with(&mut rng).unwrap();
        let order: Vec<String> = session.cards().iter().map(|c| c.term.clone()).collect();

        let reloaded = DeckStore::open(temp_dir.path().to_path_buf()).load();
        let reloaded_order: Vec<String> = reloaded.iter().map(|c| c.term.clone()).collect();
        assert_eq!(reloaded_order, order);
    }

    #[test]
    fn test_add_card_appends_and_moves_cursor() {
        let mut session = seeded_session();
        session.flip();

        let card = session.add_card("  obrigado  ", "thanks (Portuguese)", Some("PT")).unwrap();

        assert_eq!(card.term, "obrigado");
        assert_eq!(card.tag.as_deref(), Some("PT"));
        assert_eq!(session.len(), 6);
        assert_eq!(session.index(), 5);
        assert_eq!(session.face(), CardFace::Term);
        assert_eq!(session.visible_text(), "obrigado");
    }

    #[test]
    fn test_add_card_rejects_blank_sides() {
        let mut session = seeded_session();

        let err = session.add_card("   ", "an answer", None).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::EmptyTerm)
        ));

        let err = session.add_card("a term", "\t", None).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::EmptyAnswer)
        ));

        assert_eq!(session.len(), 5);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_add_card_normalizes_tag() {
        let mut session = seeded_session();

        let card = session.add_card("term", "answer", Some("   ")).unwrap();
        assert_eq!(card.tag, None);

        let card = session.add_card("term2", "answer2", Some(" KO ")).unwrap();
        assert_eq!(card.tag.as_deref(), Some("KO"));
    }

    #[test]
    fn test_add_card_persists() {
        let temp_dir = TempDir::new().unwrap();

        let mut session = StudySession::open(DeckStore::open(temp_dir.path().to_path_buf()));
        session.add_card("merci", "thanks (French)", Some("FR")).unwrap();

        let reloaded = DeckStore::open(temp_dir.path().to_path_buf()).load();
        assert_eq!(reloaded.len(), 6);
        assert_eq!(reloaded[5].term, "merci");
    }

    #[test]
    fn test_reset_restores_seed() {
        let temp_dir = TempDir::new().unwrap();

        let mut session = StudySession::open(DeckStore::open(temp_dir.path().to_path_buf()));
        session.add_card("extra", "card", None).unwrap();
        session.next();

        session.reset().unwrap();

        assert_eq!(session.cards(), seed_deck());
        assert_eq!(session.index(), 0);
        assert_eq!(session.face(), CardFace::Term);

        let reloaded = DeckStore::open(temp_dir.path().to_path_buf()).load();
        assert_eq!(reloaded, seed_deck());
    }

    #[test]
    fn test_import_replaces_deck() {
        let mut session = seeded_session();

        let count = session
            .import(r#"[{"term":"hej","answer":"hello (Swedish)","tag":"SV"}]"#)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(session.len(), 1);
        assert_eq!(session.index(), 0);
        assert_eq!(session.visible_text(), "hej");
    }

    #[test]
    fn test_import_may_empty_the_deck() {
        let mut session = seeded_session();

        let count = session.import("[]").unwrap();

        assert_eq!(count, 0);
        assert!(session.is_empty());
        assert_eq!(session.visible_text(), EMPTY_MARKER);
        assert_eq!(session.counter(), (0, 1));
    }

    #[test]
    fn test_failed_import_leaves_deck_untouched() {
        let mut session = seeded_session();
        session.next();

        let err = session.import(r#"{"term":"a"}"#).unwrap_err();
        assert!(matches!(err, SessionError::Import(_)));

        assert_eq!(session.len(), 5);
        assert_eq!(session.index(), 1);
        assert_eq!(session.cards(), seed_deck());
    }

    #[test]
    fn test_import_persists() {
        let temp_dir = TempDir::new().unwrap();

        let mut session = StudySession::open(DeckStore::open(temp_dir.path().to_path_buf()));
        session
            .import(r#"[{"term":"hej","answer":"hello (Swedish)"}]"#)
            .unwrap();

        let reloaded = DeckStore::open(temp_dir.path().to_path_buf()).load();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].term, "hej");
    }

    #[test]
    fn test_export_roundtrips_current_deck() {
        let mut session = seeded_session();
        session.add_card("hej", "hello (Swedish)", Some("SV")).unwrap();
        let exported = session.export().unwrap();

        let mut other = session_with(Vec::new());
        other.import(&exported).unwrap();

        assert_eq!(other.cards(), session.cards());
    }
}
