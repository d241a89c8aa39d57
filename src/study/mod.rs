//! Interactive study over a deck: cursor, card face, and deck mutations

pub mod session;

pub use session::{CardFace, SessionError, StudySession, ValidationError, EMPTY_MARKER};
