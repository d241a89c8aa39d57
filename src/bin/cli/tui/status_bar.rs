use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    match state.mode {
        Mode::AddCard => {
            let text = format!(" {}: {}\u{2588}", state.add_stage.label(), state.input_text);
            let prompt =
                Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
            f.render_widget(prompt, area);
        }
        Mode::ImportPath => {
            let text = format!(" Import path: {}\u{2588}", state.input_text);
            let prompt =
                Paragraph::new(text).style(Style::default().bg(Color::Magenta).fg(Color::White));
            f.render_widget(prompt, area);
        }
        Mode::Card => {
            let hints =
                " Space: flip  \u{2190}/\u{2192}: prev/next  s: shuffle  a: add  r: reset  e: export  i: import  ?: help  q: quit ";
            let status =
                Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
            f.render_widget(status, area);
        }
    }
}
