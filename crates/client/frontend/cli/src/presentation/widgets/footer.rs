//! Footer widget with key hints for the current phase.

use game_core::PhaseKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect, phase: PhaseKind) {
    let hints = match phase {
        PhaseKind::PlayerChoice | PhaseKind::TargetSelection => {
            "1-4: choose | Up/Down (k/j): move | Enter: confirm | q: quit"
        }
        PhaseKind::Victory | PhaseKind::GameOver => "Enter / r: play again | q: quit",
        _ => "q: quit",
    };

    frame.render_widget(
        Paragraph::new(Line::styled(hints, Style::default().fg(Color::Gray))),
        area,
    );
}
