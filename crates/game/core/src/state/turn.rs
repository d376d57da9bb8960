use arrayvec::ArrayVec;

use crate::combatant::CombatantId;
use crate::config::BattleConfig;

/// Ordered list of combatants for the current round of scheduling.
pub type TurnQueue = ArrayVec<CombatantId, { BattleConfig::MAX_COMBATANTS }>;

/// Turn bookkeeping owned by the battle state.
///
/// The queue is rebuilt from living combatants at every turn start, so dead
/// combatants drop out on the next turn rather than mid-animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    /// Living combatants, fastest first.
    pub queue: TurnQueue,

    /// Position of the next (or current) actor in `queue`.
    pub index: usize,

    /// The combatant whose turn it is, once a turn has started.
    pub current: Option<CombatantId>,
}

impl TurnState {
    pub fn new(queue: TurnQueue) -> Self {
        Self {
            queue,
            index: 0,
            current: None,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(TurnQueue::new())
    }
}
