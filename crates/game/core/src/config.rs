/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleConfig {
    /// Number of entries kept in the rolling combat log (oldest evicted first).
    pub log_capacity: usize,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Party members fighting the boss.
    pub const PARTY_SIZE: usize = 4;
    /// Boss plus the full party.
    pub const MAX_COMBATANTS: usize = Self::PARTY_SIZE + 1;
    /// Every class (and the boss) has exactly this many moves.
    pub const MOVES_PER_CLASS: usize = 2;

    // ===== resolver constants =====
    /// Lower bound of the uniform damage/heal jitter.
    pub const JITTER_MIN: f64 = 0.85;
    /// Upper bound of the uniform damage/heal jitter.
    pub const JITTER_MAX: f64 = 1.15;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LOG_CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self {
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn with_log_capacity(log_capacity: usize) -> Self {
        Self {
            log_capacity: log_capacity.max(1),
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
