//! UI rendering using the widget architecture over a BattleView.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::BattleView;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view: &'a BattleView,
    pub log_panel_height: u16,
}

/// Render one frame of the battle screen.
///
/// Layout, top to bottom:
/// - header: phase, current actor and turn order
/// - battlefield: party gauges, effect lane, boss gauge
/// - menu and combat log side by side
/// - footer with key hints
///
/// The victory or game-over banner is drawn over everything when present.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        render_battle(frame, ctx, &theme);

        if let Some(text) = ctx.view.banner {
            let area = centered_rect(frame.area(), 48, 5);
            widgets::banner::render(frame, area, ctx.view.phase, text);
        }
    })?;

    Ok(())
}

fn render_battle(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(0),                       // Battlefield
            Constraint::Length(ctx.log_panel_height), // Menu + log
            Constraint::Length(1),                    // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], ctx.view, theme);
    widgets::battlefield::render(frame, rows[1], ctx.view, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[2]);

    widgets::menu::render(frame, bottom[0], ctx.view.menu.as_ref());
    widgets::log::render(frame, bottom[1], &ctx.view.log, theme);
    widgets::footer::render(frame, rows[3], ctx.view.phase);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
