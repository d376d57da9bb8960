//! Battlefield widget: party and boss HP gauges with the effect lane between.

use client_frontend_core::{BattleView, CombatantView, EffectView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
};

use crate::presentation::animation::{EffectVisual, LANE_ROWS};
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &BattleView, theme: &RatatuiTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38), // Party
            Constraint::Percentage(24), // Effect lane
            Constraint::Percentage(38), // Boss
        ])
        .split(area);

    render_side(frame, columns[0], " Party ", &view.party, theme);
    render_effect(frame, columns[1], view.effect.as_ref(), theme);
    render_side(frame, columns[2], " Boss ", std::slice::from_ref(&view.boss), theme);
}

fn render_side(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    combatants: &[CombatantView],
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_owned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(combatants.iter().map(|_| Constraint::Length(2)))
        .split(inner);

    for (combatant, row) in combatants.iter().zip(rows.iter()) {
        render_gauge(frame, *row, combatant, theme);
    }
}

fn render_gauge(frame: &mut Frame, area: Rect, combatant: &CombatantView, theme: &RatatuiTheme) {
    let marker = if combatant.is_current { "> " } else { "  " };
    let label = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:<11}", combatant.name),
            theme.style_combatant(combatant),
        ),
        Span::raw(format!("{:>3}/{:<3} ", combatant.hp, combatant.max_hp)),
    ]);

    let gauge = LineGauge::default()
        .filled_style(theme.style_health(combatant.hp, combatant.max_hp))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label(label)
        .ratio(combatant.hp_ratio().clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

fn render_effect(frame: &mut Frame, area: Rect, effect: Option<&EffectView>, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(effect) = effect else {
        return;
    };

    // Heals play on the party side, boss attacks travel right to left.
    let reversed = effect.from_boss() || effect.is_heal;
    let style = Style::default().fg(theme.effect_color(effect.kind));

    let mut lines = vec![
        Line::from(Span::styled(
            effect.move_name,
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        EffectVisual::for_kind(effect.kind)
            .render(inner.width as usize, effect.progress, reversed)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style))),
    );

    if effect.progress >= 0.5 {
        lines.push(Line::from(""));
        lines.push(outcome_line(effect));
    }

    let height = (LANE_ROWS as u16 + 4).min(inner.height);
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    let lane = Rect::new(inner.x, top, inner.width, height);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), lane);
}

fn outcome_line(effect: &EffectView) -> Line<'static> {
    if !effect.hit {
        return Line::from(Span::styled(
            "MISS",
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }

    if effect.is_heal {
        Line::from(Span::styled(
            format!("+{}", effect.amount),
            Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("-{}", effect.amount),
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ))
    }
}
