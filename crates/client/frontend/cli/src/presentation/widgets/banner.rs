//! Victory / game-over banner overlay.

use game_core::PhaseKind;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, phase: PhaseKind, text: &str) {
    let color = match phase {
        PhaseKind::Victory => Color::LightGreen,
        _ => Color::LightRed,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(text.to_owned(), style)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
