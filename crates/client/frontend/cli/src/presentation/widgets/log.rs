//! Combat log widget.

use client_frontend_core::{LogTone, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the latest log lines, newest at the bottom.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    log: &[String],
    theme: &T,
) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = log.len().saturating_sub(visible);

    let lines: Vec<Line> = log[start..]
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.as_str(),
                theme.style_log(LogTone::classify(line)),
            ))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));

    frame.render_widget(paragraph, area);
}
