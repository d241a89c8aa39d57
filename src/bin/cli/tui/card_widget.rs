use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let session = &state.app.session;
    let (position, total) = session.counter();

    let block = Block::default()
        .title(format!(" {}  {}/{} ", session.face().label(), position, total))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.show_help {
        let help_text = vec![
            Line::from(""),
            Line::from("  Space/Enter or click  flip the card"),
            Line::from("  \u{2190}/h  \u{2192}/l            previous / next card"),
            Line::from("  s                    shuffle the deck"),
            Line::from("  a                    add a card"),
            Line::from("  r                    reset to the starter deck"),
            Line::from("  e                    export the deck to JSON"),
            Line::from("  i                    import a deck from JSON"),
            Line::from("  ?                    close this help"),
            Line::from("  q                    quit"),
        ];
        let paragraph = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    // Rough vertical centering of the face text within the panel
    let inner_height = area.height.saturating_sub(2) as usize;
    let top_padding = inner_height.saturating_sub(4) / 2;

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..top_padding {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        session.visible_text().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    lines.push(Line::from(""));

    let tag_line = match session.current().and_then(|c| c.tag.as_deref()) {
        Some(tag) => format!("#{}", tag),
        None => String::new(),
    };
    lines.push(Line::from(Span::styled(
        tag_line,
        Style::default().fg(Color::Cyan),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        state.chips_line(),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, area);
}
