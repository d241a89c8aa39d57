use std::fs;

use ratatui::prelude::Rect;

use crate::app::App;
use lexicard::deck::models::distinct_tags;
use lexicard::deck::transfer::EXPORT_FILE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Card,
    AddCard,
    ImportPath,
}

/// Which field of the add form is being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStage {
    Term,
    Answer,
    Tag,
}

impl AddStage {
    pub fn label(&self) -> &'static str {
        match self {
            AddStage::Term => "Term",
            AddStage::Answer => "Answer",
            AddStage::Tag => "Tag (optional)",
        }
    }
}

pub struct TuiState {
    pub app: App,
    pub mode: Mode,

    // Add-form state: fields already entered, current stage
    pub add_stage: AddStage,
    pub add_term: String,
    pub add_answer: String,
    pub add_tag: String,

    // Line buffer for the field or path currently being typed
    pub input_text: String,

    pub flash_message: Option<String>,

    // Card panel area for mouse hit-testing (updated each draw)
    pub card_area: Option<Rect>,

    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        Self {
            app,
            mode: Mode::Card,
            add_stage: AddStage::Term,
            add_term: String::new(),
            add_answer: String::new(),
            add_tag: String::new(),
            input_text: String::new(),
            flash_message: None,
            card_area: None,
            show_help: false,
            quit: false,
        }
    }

    /// `Cards: N` plus up to six distinct tags in first-seen order
    pub fn chips_line(&self) -> String {
        let cards = self.app.session.cards();
        let mut line = format!("Cards: {}", cards.len());
        for tag in distinct_tags(cards).into_iter().take(6) {
            line.push_str("  #");
            line.push_str(tag);
        }
        line
    }

    pub fn begin_add(&mut self) {
        self.mode = Mode::AddCard;
        self.add_stage = AddStage::Term;
        self.add_term.clear();
        self.add_answer.clear();
        self.add_tag.clear();
        self.input_text.clear();
    }

    pub fn begin_import(&mut self) {
        self.mode = Mode::ImportPath;
        self.input_text.clear();
    }

    pub fn cancel_input(&mut self) {
        self.input_text.clear();
        self.mode = Mode::Card;
    }

    /// Enter in the add form: stash the current field, advance to the next
    /// one (pre-filled with any earlier entry), submit after the tag stage.
    pub fn advance_add(&mut self) {
        match self.add_stage {
            AddStage::Term => {
                self.add_term = std::mem::take(&mut self.input_text);
                self.input_text = self.add_answer.clone();
                self.add_stage = AddStage::Answer;
            }
            AddStage::Answer => {
                self.add_answer = std::mem::take(&mut self.input_text);
                self.input_text = self.add_tag.clone();
                self.add_stage = AddStage::Tag;
            }
            AddStage::Tag => {
                self.add_tag = std::mem::take(&mut self.input_text);
                self.submit_add();
            }
        }
    }

    fn submit_add(&mut self) {
        let tag = if self.add_tag.trim().is_empty() {
            None
        } else {
            Some(self.add_tag.as_str())
        };

        match self.app.session.add_card(&self.add_term, &self.add_answer, tag) {
            Ok(card) => {
                self.flash_message =
                    Some(format!("Added \"{}\" ({} cards)", card.term, self.app.session.len()));
                self.mode = Mode::Card;
            }
            Err(e) => {
                // Keep the form; send the user back to the first field
                self.flash_message = Some(format!("Error: {}", e));
                self.add_stage = AddStage::Term;
                self.input_text = self.add_term.clone();
            }
        }
    }

    /// Enter in import mode: read the file at the typed path and replace
    /// the deck with its cards
    pub fn submit_import(&mut self) {
        let path = self.input_text.trim().to_string();
        if path.is_empty() {
            return;
        }

        match fs::read_to_string(&path) {
            Ok(text) => match self.app.session.import(&text) {
                Ok(count) => {
                    self.flash_message = Some(format!("Imported {} cards", count));
                }
                Err(e) => {
                    self.flash_message = Some(format!("Error: {}", e));
                }
            },
            Err(e) => {
                self.flash_message = Some(format!("Error reading {}: {}", path, e));
            }
        }

        self.input_text.clear();
        self.mode = Mode::Card;
    }

    /// Write the deck to the fixed export filename in the working directory
    pub fn export_deck(&mut self) {
        let json = match self.app.session.export() {
            Ok(json) => json,
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
                return;
            }
        };

        match fs::write(EXPORT_FILE_NAME, &json) {
            Ok(()) => {
                self.flash_message = Some(format!(
                    "Exported {} cards to {}",
                    self.app.session.len(),
                    EXPORT_FILE_NAME
                ));
            }
            Err(e) => {
                self.flash_message = Some(format!("Error writing {}: {}", EXPORT_FILE_NAME, e));
            }
        }
    }

    pub fn shuffle_deck(&mut self) {
        match self.app.session.shuffle() {
            Ok(()) => {
                self.flash_message = Some(format!("Shuffled {} cards", self.app.session.len()));
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }

    pub fn reset_deck(&mut self) {
        match self.app.session.reset() {
            Ok(()) => {
                self.flash_message = Some(format!(
                    "Deck reset to the starter deck ({} cards)",
                    self.app.session.len()
                ));
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }
}
