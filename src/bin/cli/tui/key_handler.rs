use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.mode {
        Mode::Card => handle_card_key(state, key),
        Mode::AddCard => handle_add_key(state, key),
        Mode::ImportPath => handle_import_key(state, key),
    }
}

fn handle_card_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char(' ') | KeyCode::Enter => state.app.session.flip(),
        KeyCode::Left | KeyCode::Char('h') => state.app.session.prev(),
        KeyCode::Right | KeyCode::Char('l') => state.app.session.next(),
        KeyCode::Char('s') => state.shuffle_deck(),
        KeyCode::Char('r') => state.reset_deck(),
        KeyCode::Char('a') => state.begin_add(),
        KeyCode::Char('e') => state.export_deck(),
        KeyCode::Char('i') => state.begin_import(),
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        _ => {}
    }
}

fn handle_add_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => state.advance_add(),
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

fn handle_import_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => state.submit_import(),
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if state.mode != Mode::Card {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Click on the card flips it
            if let Some(ref area) = state.card_area {
                let (col, row) = (mouse.column, mouse.row);
                if col >= area.x
                    && col < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
                {
                    state.flash_message = None;
                    state.app.session.flip();
                }
            }
        }
        MouseEventKind::ScrollDown => state.app.session.next(),
        MouseEventKind::ScrollUp => state.app.session.prev(),
        _ => {}
    }
}
