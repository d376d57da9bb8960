//! Header widget displaying the phase, current actor and turn order.

use client_frontend_core::{BattleView, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel.
///
/// Displays the phase, whose turn it is, and the turn queue in acting order.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &BattleView,
    theme: &T,
) {
    let actor = view.current().map_or("-", |c| c.name);

    let mut spans = vec![
        Span::raw("Phase: "),
        Span::styled(
            view.phase.to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Turn: "),
        Span::styled(
            actor,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Order: "),
    ];

    for (i, combatant) in view.turn_order.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(combatant.name, theme.style_combatant(combatant)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Battle "));

    frame.render_widget(paragraph, area);
}
