//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{CombatantView, LogTone, PresentationMapper};
use game_core::AnimationKind;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_health(&self, current: u32, maximum: u32) -> Self::Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (current * 100) / maximum;
        let color = match percent {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    fn style_combatant(&self, combatant: &CombatantView) -> Self::Style {
        if !combatant.alive {
            return Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        let base = if combatant.is_boss {
            Style::default().fg(Color::LightMagenta)
        } else {
            Style::default().fg(Color::White)
        };

        if combatant.is_current {
            self.emphasize_current(base)
        } else {
            base
        }
    }

    fn style_log(&self, tone: LogTone) -> Self::Style {
        match tone {
            LogTone::Damage => Style::default().fg(Color::White),
            LogTone::Heal => Style::default().fg(Color::LightGreen),
            LogTone::Miss => Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        }
    }

    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style {
        base_style.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }

    /// Color of the in-flight effect for an animation kind.
    pub fn effect_color(&self, kind: AnimationKind) -> Color {
        match kind {
            AnimationKind::Strike | AnimationKind::StaffStrike | AnimationKind::QuickStrike => {
                Color::White
            }
            AnimationKind::HeavySlash => Color::LightYellow,
            AnimationKind::MagicMissile => Color::LightCyan,
            AnimationKind::Fireball => Color::LightRed,
            AnimationKind::HealingAura => Color::LightGreen,
            AnimationKind::Backstab => Color::Yellow,
            AnimationKind::Smash => Color::Red,
            AnimationKind::DarkBlast => Color::Magenta,
        }
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::new()
    }
}
