//! Authoritative battle state representation.
//!
//! This module owns the data that describes one battle: the party, the boss,
//! turn bookkeeping, the rolling log, and the current state-machine phase.
//! Frontends read it through shared references; it is mutated exclusively by
//! the engine (and by HP operations on individual combatants).
mod action;
mod log;
mod menu;
mod phase;
mod turn;

pub use action::{Action, AnimationTimer};
pub use log::BattleLog;
pub use menu::{Menu, MenuChoice, MenuOption};
pub use phase::{BattlePhase, PhaseKind};
pub use turn::{TurnQueue, TurnState};

use crate::combatant::{Combatant, CombatantClass, CombatantId};
use crate::config::BattleConfig;
use crate::engine::recalc_queue;

/// Canonical snapshot of one battle.
#[derive(Clone, Debug)]
pub struct BattleState {
    party: [Combatant; BattleConfig::PARTY_SIZE],
    boss: Combatant,
    pub(crate) turn: TurnState,
    pub(crate) log: BattleLog,
    pub(crate) phase: BattlePhase,
    config: BattleConfig,
}

impl BattleState {
    /// Creates a fresh battle: every combatant at class defaults, empty log,
    /// waiting at turn start.
    pub fn new(config: BattleConfig) -> Self {
        let party = std::array::from_fn(|slot| {
            Combatant::new(CombatantId::party(slot), CombatantClass::PARTY[slot])
        });
        let boss = Combatant::new(CombatantId::BOSS, CombatantClass::Boss);
        let turn = TurnState::new(recalc_queue(&party, &boss));

        Self {
            party,
            boss,
            turn,
            log: BattleLog::new(config.log_capacity),
            phase: BattlePhase::TurnStart,
            config,
        }
    }

    /// Rebuilds the battle from scratch with the same configuration.
    pub fn fresh(&self) -> Self {
        Self::new(self.config.clone())
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn party(&self) -> &[Combatant] {
        &self.party
    }

    pub fn boss(&self) -> &Combatant {
        &self.boss
    }

    /// Looks up a combatant by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this battle.
    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        match id.party_slot() {
            None => &self.boss,
            Some(slot) => &self.party[slot],
        }
    }

    /// Mutable lookup, used for HP operations.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this battle.
    pub fn combatant_mut(&mut self, id: CombatantId) -> &mut Combatant {
        match id.party_slot() {
            None => &mut self.boss,
            Some(slot) => &mut self.party[slot],
        }
    }

    /// Living party members in their fixed order.
    pub fn living_party(&self) -> impl Iterator<Item = &Combatant> {
        self.party.iter().filter(|member| member.is_alive())
    }

    pub fn is_party_defeated(&self) -> bool {
        self.living_party().next().is_none()
    }

    /// All combatants, boss first.
    pub fn combatants(&self) -> impl Iterator<Item = &Combatant> {
        std::iter::once(&self.boss).chain(self.party.iter())
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Ordered turn queue from the latest recomputation.
    pub fn turn_queue(&self) -> &[CombatantId] {
        &self.turn.queue
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn phase(&self) -> &BattlePhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Menu of the current choice phase, if any.
    pub fn menu(&self) -> Option<&Menu> {
        self.phase.menu()
    }

    /// Action in flight while animating.
    pub fn pending_action(&self) -> Option<&Action> {
        match &self.phase {
            BattlePhase::Animation { action, .. } => Some(action),
            _ => None,
        }
    }

    pub fn animation(&self) -> Option<&AnimationTimer> {
        match &self.phase {
            BattlePhase::Animation { timer, .. } => Some(timer),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.kind().is_terminal()
    }

    /// Log wording for an action once its animation completes.
    pub fn describe(&self, action: &Action) -> String {
        let attacker = self.combatant(action.attacker).name();
        let target = self.combatant(action.target).name();
        let name = action.move_name;

        match (action.outcome.is_hit(), action.is_heal()) {
            (true, true) => format!(
                "{attacker} uses {name} on {target}, healing {} HP!",
                action.amount
            ),
            (true, false) => format!(
                "{attacker} uses {name} on {target}, dealing {} damage!",
                action.amount
            ),
            (false, _) => format!("{attacker} used {name} on {target} but missed!"),
        }
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AnimationKind, MoveCategory};
    use crate::combat::HitOutcome;

    fn action(outcome: HitOutcome, category: MoveCategory) -> Action {
        Action {
            attacker: CombatantId::party(2),
            target: CombatantId::party(0),
            move_name: "Heal",
            category,
            amount: 37,
            outcome,
            animation: AnimationKind::HealingAura,
        }
    }

    #[test]
    fn new_battle_starts_at_class_defaults() {
        let state = BattleState::default();
        assert_eq!(state.phase_kind(), PhaseKind::TurnStart);
        assert_eq!(state.party().len(), 4);
        assert!(state.party().iter().all(|m| m.hp() == m.max_hp));
        assert_eq!(state.boss().hp(), 300);
        assert!(state.log().is_empty());
        assert_eq!(state.turn().index, 0);
    }

    #[test]
    fn party_is_in_fixed_order() {
        let state = BattleState::default();
        let names: Vec<_> = state.party().iter().map(Combatant::name).collect();
        assert_eq!(names, ["Warrior", "Mage", "Healer", "Thief"]);
        assert_eq!(state.combatant(CombatantId::party(3)).name(), "Thief");
        assert_eq!(state.combatant(CombatantId::BOSS).name(), "Final Boss");
    }

    #[test]
    fn describe_uses_hit_heal_and_miss_wording() {
        let state = BattleState::default();

        let heal = action(HitOutcome::Hit, MoveCategory::Heal);
        assert_eq!(
            state.describe(&heal),
            "Healer uses Heal on Warrior, healing 37 HP!"
        );

        let mut hit = action(HitOutcome::Hit, MoveCategory::Physical);
        hit.move_name = "Attack";
        hit.target = CombatantId::BOSS;
        assert_eq!(
            state.describe(&hit),
            "Healer uses Attack on Final Boss, dealing 37 damage!"
        );

        let mut miss = hit.clone();
        miss.outcome = HitOutcome::Miss;
        assert_eq!(
            state.describe(&miss),
            "Healer used Attack on Final Boss but missed!"
        );
    }

    #[test]
    fn party_defeat_requires_everyone_down() {
        let mut state = BattleState::default();
        for slot in 0..3 {
            state.combatant_mut(CombatantId::party(slot)).take_damage(999);
        }
        assert!(!state.is_party_defeated());

        state.combatant_mut(CombatantId::party(3)).take_damage(999);
        assert!(state.is_party_defeated());
    }
}
