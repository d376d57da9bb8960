//! Action menu widget for move and heal-target selection.

use client_frontend_core::MenuView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the menu panel.
///
/// Options are numbered from 1 so number keys pick them directly; the
/// highlighted option is the one Enter confirms.
pub fn render(frame: &mut Frame, area: Rect, menu: Option<&MenuView>) {
    let mut lines = Vec::new();

    match menu {
        Some(menu) => {
            lines.push(Line::from(Span::styled(
                menu.prompt.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            for (i, label) in menu.options.iter().enumerate() {
                let selected = i == menu.selected;
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {}. ", i + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(label.clone(), style),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Waiting...",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Actions ")
                .title_alignment(Alignment::Center),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
