use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

use super::app_state::TuiState;
use super::{card_widget, status_bar};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Main layout: card panel + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let card_area = outer[0];
    let status_area = outer[1];

    // Save area for mouse hit-testing
    state.card_area = Some(card_area);

    card_widget::draw(f, card_area, state);
    status_bar::draw(f, status_area, state);
}
