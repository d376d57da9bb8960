use crate::combatant::CombatantId;

use super::{Action, AnimationTimer, Menu};

/// Battle state machine.
///
/// Only the two choice phases accept selection input, and only the two
/// terminal phases accept restart. Every other phase advances on its own
/// when the engine is ticked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    /// Checking end conditions and picking the next actor.
    TurnStart,
    /// A party member is choosing a move.
    PlayerChoice { actor: CombatantId, menu: Menu },
    /// The healer is choosing who to heal.
    TargetSelection {
        actor: CombatantId,
        move_index: usize,
        menu: Menu,
    },
    /// A resolved action is playing out.
    Animation {
        action: Action,
        timer: AnimationTimer,
    },
    /// Advancing the turn index.
    NextTurn,
    Victory,
    GameOver,
}

impl BattlePhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::TurnStart => PhaseKind::TurnStart,
            Self::PlayerChoice { .. } => PhaseKind::PlayerChoice,
            Self::TargetSelection { .. } => PhaseKind::TargetSelection,
            Self::Animation { .. } => PhaseKind::Animation,
            Self::NextTurn => PhaseKind::NextTurn,
            Self::Victory => PhaseKind::Victory,
            Self::GameOver => PhaseKind::GameOver,
        }
    }

    pub fn menu(&self) -> Option<&Menu> {
        match self {
            Self::PlayerChoice { menu, .. } | Self::TargetSelection { menu, .. } => Some(menu),
            _ => None,
        }
    }

    pub fn menu_mut(&mut self) -> Option<&mut Menu> {
        match self {
            Self::PlayerChoice { menu, .. } | Self::TargetSelection { menu, .. } => Some(menu),
            _ => None,
        }
    }
}

/// Fieldless mirror of [`BattlePhase`] for logging and matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "title_case")]
pub enum PhaseKind {
    TurnStart,
    PlayerChoice,
    TargetSelection,
    Animation,
    NextTurn,
    Victory,
    GameOver,
}

impl PhaseKind {
    /// Phases that show a menu and take navigation input.
    pub fn accepts_selection(self) -> bool {
        matches!(self, Self::PlayerChoice | Self::TargetSelection)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_choice_phases_accept_selection() {
        let accepting = [PhaseKind::PlayerChoice, PhaseKind::TargetSelection];
        let others = [
            PhaseKind::TurnStart,
            PhaseKind::Animation,
            PhaseKind::NextTurn,
            PhaseKind::Victory,
            PhaseKind::GameOver,
        ];

        assert!(accepting.iter().all(|kind| kind.accepts_selection()));
        assert!(others.iter().all(|kind| !kind.accepts_selection()));
    }
}
