use crate::catalog::{AnimationKind, MoveCategory};
use crate::combat::HitOutcome;
use crate::combatant::CombatantId;

/// A resolved move waiting for its animation to finish.
///
/// The amount and outcome are fixed at resolution time; HP changes only when
/// the animation completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub attacker: CombatantId,
    pub target: CombatantId,
    pub move_name: &'static str,
    pub category: MoveCategory,
    pub amount: u32,
    pub outcome: HitOutcome,
    pub animation: AnimationKind,
}

impl Action {
    pub fn is_heal(&self) -> bool {
        self.category == MoveCategory::Heal
    }
}

/// Start time and kind of the playing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTimer {
    pub kind: AnimationKind,
    pub started_at_ms: u64,
}

impl AnimationTimer {
    pub fn start(kind: AnimationKind, now_ms: u64) -> Self {
        Self {
            kind,
            started_at_ms: now_ms,
        }
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    /// Fraction of the animation played, in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let duration = self.kind.duration_ms().max(1);
        (self.elapsed_ms(now_ms) as f64 / duration as f64).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= self.kind.duration_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_after_duration() {
        let timer = AnimationTimer::start(AnimationKind::QuickStrike, 1_000);
        assert!(!timer.is_finished(1_399));
        assert!(timer.is_finished(1_400));
        assert_eq!(timer.progress(1_200), 0.5);
    }

    #[test]
    fn clock_before_start_reads_as_zero_progress() {
        let timer = AnimationTimer::start(AnimationKind::Smash, 500);
        assert_eq!(timer.progress(100), 0.0);
        assert_eq!(timer.progress(10_000), 1.0);
    }
}
