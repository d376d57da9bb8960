use std::cmp::Reverse;

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::state::{BattlePhase, TurnQueue, TurnState};

use super::BattleEngine;

/// Builds the turn queue from living combatants.
///
/// The boss (if alive) goes first, followed by living party members in their
/// fixed order. The list is then stable-sorted by speed descending, so ties
/// keep that insertion order.
pub fn recalc_queue(party: &[Combatant], boss: &Combatant) -> TurnQueue {
    let mut living: ArrayVec<&Combatant, { BattleConfig::MAX_COMBATANTS }> =
        std::iter::once(boss)
            .chain(party)
            .filter(|combatant| combatant.is_alive())
            .take(BattleConfig::MAX_COMBATANTS)
            .collect();

    living.sort_by_key(|combatant| Reverse(combatant.speed));
    living.iter().map(|combatant| combatant.id).collect()
}

/// Turn scheduling methods for BattleEngine.
impl<R: RngOracle + ?Sized> BattleEngine<'_, R> {
    /// Checks end conditions, then selects the next actor.
    ///
    /// The turn index wraps modulo the freshly computed queue length, so the
    /// same index may land on a different combatant after someone dies.
    pub(super) fn start_turn(&mut self, now_ms: u64) {
        if !self.state.boss().is_alive() {
            info!("boss defeated");
            self.state.phase = BattlePhase::Victory;
            return;
        }
        if self.state.is_party_defeated() {
            info!("party defeated");
            self.state.phase = BattlePhase::GameOver;
            return;
        }

        let queue = recalc_queue(self.state.party(), self.state.boss());
        // The boss is alive, so the queue is never empty here.
        let index = self.state.turn.index % queue.len();
        let current = queue[index];

        debug!(
            actor = self.state.combatant(current).name(),
            index,
            queue_len = queue.len(),
            "turn started"
        );

        self.state.turn = TurnState {
            queue,
            index,
            current: Some(current),
        };

        if current.is_boss() {
            self.boss_turn(now_ms);
        } else {
            self.open_move_menu(current);
        }
    }

    /// Advances the turn index and returns to turn start.
    pub(super) fn advance_turn(&mut self) {
        self.state.turn.index += 1;
        self.state.phase = BattlePhase::TurnStart;
    }
}
