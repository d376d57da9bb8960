//! Text-mode visuals for in-flight actions.
//!
//! Each [`AnimationKind`] maps to one [`EffectVisual`] variant carrying only
//! the parameters that variant needs. A single [`EffectVisual::render`]
//! dispatch draws the effect into a lane between attacker and target for a
//! given playback progress. Timing comes from the battle; nothing here
//! affects how long an animation blocks.
use game_core::AnimationKind;

/// Rows in the effect lane.
pub const LANE_ROWS: usize = 3;
const MID: usize = LANE_ROWS / 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectVisual {
    /// Streak travelling from attacker to target.
    Slash {
        glyph: char,
        /// Rows covered by the streak.
        thickness: usize,
        trail: usize,
        /// Flash at the midpoint of the lane.
        flash: bool,
    },
    /// Projectile travelling to the target.
    Projectile { glyph: char, swell: bool },
    /// Orb weaving between rows on its way.
    Spiral { glyph: char },
    /// Ring expanding around the target.
    Aura { glyph: char, max_radius: usize },
    /// Burst expanding out of the target.
    Burst { glyph: char, max_radius: usize },
}

impl EffectVisual {
    pub fn for_kind(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::Strike => Self::Slash {
                glyph: '-',
                thickness: 1,
                trail: 2,
                flash: false,
            },
            AnimationKind::HeavySlash => Self::Slash {
                glyph: '=',
                thickness: 3,
                trail: 3,
                flash: true,
            },
            AnimationKind::StaffStrike => Self::Slash {
                glyph: '/',
                thickness: 1,
                trail: 1,
                flash: false,
            },
            AnimationKind::QuickStrike => Self::Slash {
                glyph: '~',
                thickness: 1,
                trail: 4,
                flash: false,
            },
            AnimationKind::MagicMissile => Self::Projectile {
                glyph: '*',
                swell: false,
            },
            AnimationKind::Fireball => Self::Projectile {
                glyph: 'o',
                swell: true,
            },
            AnimationKind::DarkBlast => Self::Spiral { glyph: '@' },
            AnimationKind::HealingAura => Self::Aura {
                glyph: '+',
                max_radius: 4,
            },
            AnimationKind::Backstab => Self::Burst {
                glyph: 'x',
                max_radius: 3,
            },
            AnimationKind::Smash => Self::Burst {
                glyph: '#',
                max_radius: 6,
            },
        }
    }

    /// Draws the effect into `LANE_ROWS` rows of `width` columns.
    ///
    /// The attacker sits at column 0 and the target at the last column;
    /// `reversed` mirrors the lane for effects travelling right to left.
    pub fn render(&self, width: usize, progress: f64, reversed: bool) -> Vec<String> {
        let mut lane = Lane::new(width);
        if width == 0 {
            return lane.into_rows(reversed);
        }

        let progress = progress.clamp(0.0, 1.0);
        let head = ((width - 1) as f64 * progress).round() as usize;
        let target = width - 1;

        match *self {
            Self::Slash {
                glyph,
                thickness,
                trail,
                flash,
            } => {
                let rows = thickness.min(LANE_ROWS);
                let top = MID - rows / 2;
                for row in top..top + rows {
                    for col in head.saturating_sub(trail)..=head {
                        lane.set(row, col, glyph);
                    }
                }
                if flash && (0.4..=0.6).contains(&progress) {
                    lane.set(MID, width / 2, '*');
                }
            }
            Self::Projectile { glyph, swell } => {
                let glyph = if swell && (0.3..=0.7).contains(&progress) {
                    glyph.to_ascii_uppercase()
                } else {
                    glyph
                };
                lane.set(MID, head, glyph);
            }
            Self::Spiral { glyph } => {
                let phase = (progress * std::f64::consts::TAU * 2.0).sin();
                let row = if phase > 0.5 {
                    0
                } else if phase < -0.5 {
                    LANE_ROWS - 1
                } else {
                    MID
                };
                lane.set(row, head, glyph);
            }
            Self::Aura { glyph, max_radius } => {
                let radius = (max_radius as f64 * progress).round() as usize;
                lane.set(0, target.saturating_sub(radius), glyph);
                lane.set(MID, target.saturating_sub(radius), glyph);
                lane.set(LANE_ROWS - 1, target.saturating_sub(radius), glyph);
                lane.set(MID, target, '+');
            }
            Self::Burst { glyph, max_radius } => {
                let radius = (max_radius as f64 * progress).round() as usize;
                for col in target.saturating_sub(radius)..=target {
                    lane.set(MID, col, glyph);
                }
                if radius > 1 {
                    lane.set(0, target.saturating_sub(radius / 2), glyph);
                    lane.set(LANE_ROWS - 1, target.saturating_sub(radius / 2), glyph);
                }
            }
        }

        lane.into_rows(reversed)
    }
}

struct Lane {
    cells: Vec<Vec<char>>,
}

impl Lane {
    fn new(width: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; LANE_ROWS],
        }
    }

    fn set(&mut self, row: usize, col: usize, glyph: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = glyph;
        }
    }

    fn into_rows(self, reversed: bool) -> Vec<String> {
        self.cells
            .into_iter()
            .map(|row| {
                if reversed {
                    row.into_iter().rev().collect()
                } else {
                    row.into_iter().collect()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn column_of(rows: &[String], glyph: char) -> Option<usize> {
        rows.iter().find_map(|row| row.chars().position(|c| c == glyph))
    }

    #[test]
    fn every_kind_renders_a_full_lane() {
        for kind in AnimationKind::iter() {
            let rows = EffectVisual::for_kind(kind).render(20, 0.5, false);
            assert_eq!(rows.len(), LANE_ROWS, "{kind}");
            assert!(rows.iter().all(|row| row.chars().count() == 20), "{kind}");
            assert!(rows.iter().any(|row| !row.trim().is_empty()), "{kind}");
        }
    }

    #[test]
    fn projectile_travels_towards_the_target() {
        let missile = EffectVisual::for_kind(AnimationKind::MagicMissile);
        assert_eq!(column_of(&missile.render(10, 0.0, false), '*'), Some(0));
        assert_eq!(column_of(&missile.render(10, 1.0, false), '*'), Some(9));
        assert_eq!(column_of(&missile.render(10, 0.0, true), '*'), Some(9));
    }

    #[test]
    fn fireball_swells_mid_flight() {
        let fireball = EffectVisual::for_kind(AnimationKind::Fireball);
        assert!(column_of(&fireball.render(10, 0.5, false), 'O').is_some());
        assert!(column_of(&fireball.render(10, 0.9, false), 'o').is_some());
    }

    #[test]
    fn zero_width_lane_is_blank() {
        let rows = EffectVisual::for_kind(AnimationKind::Smash).render(0, 0.5, false);
        assert!(rows.iter().all(String::is_empty));
    }
}
