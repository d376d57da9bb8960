//! View-model snapshot derived from [`game_core::BattleState`] each frame.
//!
//! Presentation layers never read the battle state directly: they take a
//! [`BattleView`] built for the current clock and draw it. Everything here is
//! owned data so a frame can be rendered without holding a borrow on the
//! session.
use game_core::{AnimationKind, BattleState, Combatant, CombatantId, PhaseKind};

pub const VICTORY_BANNER: &str = "Victory! Press Enter to play again.";
pub const GAME_OVER_BANNER: &str = "Game Over! Press Enter to try again.";

/// High-level snapshot of the battle used by presentation layers.
#[derive(Clone, Debug)]
pub struct BattleView {
    pub phase: PhaseKind,
    /// Party members in their fixed order.
    pub party: Vec<CombatantView>,
    pub boss: CombatantView,
    /// Living combatants in acting order.
    pub turn_order: Vec<CombatantView>,
    pub menu: Option<MenuView>,
    /// Action being animated, with playback progress.
    pub effect: Option<EffectView>,
    /// Most recent log lines, oldest first.
    pub log: Vec<String>,
    pub banner: Option<&'static str>,
}

impl BattleView {
    pub fn from_state(state: &BattleState, now_ms: u64) -> Self {
        let current = state.turn().current;
        let view = |combatant: &Combatant| CombatantView::new(combatant, current);

        Self {
            phase: state.phase_kind(),
            party: state.party().iter().map(view).collect(),
            boss: view(state.boss()),
            turn_order: state
                .turn_queue()
                .iter()
                .map(|&id| view(state.combatant(id)))
                .collect(),
            menu: MenuView::from_state(state),
            effect: EffectView::from_state(state, now_ms),
            log: state.log().iter().map(str::to_owned).collect(),
            banner: match state.phase_kind() {
                PhaseKind::Victory => Some(VICTORY_BANNER),
                PhaseKind::GameOver => Some(GAME_OVER_BANNER),
                _ => None,
            },
        }
    }

    /// The combatant whose turn it is, if any.
    pub fn current(&self) -> Option<&CombatantView> {
        std::iter::once(&self.boss)
            .chain(&self.party)
            .find(|combatant| combatant.is_current)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: &'static str,
    pub hp: u32,
    pub max_hp: u32,
    pub alive: bool,
    pub is_boss: bool,
    pub is_current: bool,
}

impl CombatantView {
    fn new(combatant: &Combatant, current: Option<CombatantId>) -> Self {
        Self {
            id: combatant.id,
            name: combatant.name(),
            hp: combatant.hp(),
            max_hp: combatant.max_hp,
            alive: combatant.is_alive(),
            is_boss: combatant.is_boss(),
            is_current: current == Some(combatant.id),
        }
    }

    /// Remaining HP in `[0, 1]`.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: usize,
}

impl MenuView {
    fn from_state(state: &BattleState) -> Option<Self> {
        let menu = state.menu()?;
        Some(Self {
            prompt: menu.prompt.clone(),
            options: menu.options().iter().map(|o| o.label.clone()).collect(),
            selected: menu.selected(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectView {
    pub attacker: CombatantId,
    pub target: CombatantId,
    pub attacker_name: &'static str,
    pub target_name: &'static str,
    pub move_name: &'static str,
    pub amount: u32,
    pub hit: bool,
    pub is_heal: bool,
    pub kind: AnimationKind,
    /// Playback progress in `[0, 1]`.
    pub progress: f64,
}

impl EffectView {
    fn from_state(state: &BattleState, now_ms: u64) -> Option<Self> {
        let action = state.pending_action()?;
        let timer = state.animation()?;

        Some(Self {
            attacker: action.attacker,
            target: action.target,
            attacker_name: state.combatant(action.attacker).name(),
            target_name: state.combatant(action.target).name(),
            move_name: action.move_name,
            amount: action.amount,
            hit: action.outcome.is_hit(),
            is_heal: action.is_heal(),
            kind: action.animation,
            progress: timer.progress(now_ms),
        })
    }

    /// Whether the effect travels from the boss towards the party.
    pub fn from_boss(&self) -> bool {
        self.attacker.is_boss()
    }
}

/// Coarse classification of a log line for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTone {
    Damage,
    Heal,
    Miss,
}

impl LogTone {
    pub fn classify(line: &str) -> Self {
        if line.ends_with("but missed!") {
            Self::Miss
        } else if line.ends_with("HP!") {
            Self::Heal
        } else {
            Self::Damage
        }
    }
}

/// Framework-independent styling rules.
///
/// Widgets ask the mapper how to style battle concepts; each frontend
/// supplies its own `Style` type.
pub trait PresentationMapper {
    type Style;

    fn style_health(&self, current: u32, maximum: u32) -> Self::Style;

    fn style_combatant(&self, combatant: &CombatantView) -> Self::Style;

    fn style_log(&self, tone: LogTone) -> Self::Style;

    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{BattleConfig, BattleSession, InputCommand, RngOracle};

    struct Zeros;

    impl RngOracle for Zeros {
        fn unit(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn snapshot_reflects_the_first_choice() {
        let mut session = BattleSession::new(BattleConfig::default(), Zeros);
        session.tick(0);

        let view = BattleView::from_state(session.state(), 0);
        assert_eq!(view.phase, PhaseKind::PlayerChoice);
        assert_eq!(view.current().map(|c| c.name), Some("Thief"));
        assert_eq!(view.turn_order.first().map(|c| c.name), Some("Thief"));
        assert_eq!(view.boss.hp_ratio(), 1.0);

        let menu = view.menu.expect("menu");
        assert_eq!(menu.options, ["Quick Strike", "Backstab"]);
        assert!(view.effect.is_none());
        assert!(view.banner.is_none());
    }

    #[test]
    fn snapshot_tracks_animation_progress() {
        let mut session = BattleSession::new(BattleConfig::default(), Zeros);
        session.tick(0);
        session.handle_input(InputCommand::SelectOption(0), 0);

        let view = BattleView::from_state(session.state(), 200);
        let effect = view.effect.expect("effect");
        assert_eq!(effect.kind, AnimationKind::QuickStrike);
        assert_eq!(effect.target_name, "Final Boss");
        assert!(!effect.from_boss());
        assert_eq!(effect.progress, 0.5);
        assert!(view.menu.is_none());
    }

    #[test]
    fn log_tone_follows_wording() {
        assert_eq!(
            LogTone::classify("Thief used Backstab on Final Boss but missed!"),
            LogTone::Miss
        );
        assert_eq!(
            LogTone::classify("Healer uses Heal on Mage, healing 31 HP!"),
            LogTone::Heal
        );
        assert_eq!(
            LogTone::classify("Mage uses Fireball on Final Boss, dealing 25 damage!"),
            LogTone::Damage
        );
    }
}
