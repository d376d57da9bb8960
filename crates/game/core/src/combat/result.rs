//! Resolution results and move resolvers.

use crate::catalog::Move;
use crate::combatant::Combatant;
use crate::env::RngOracle;

use super::damage::{calculate_damage, calculate_heal, roll_jitter};
use super::hit::check_hit;

/// Outcome of a move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitOutcome {
    Hit,
    Miss,
}

impl HitOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Result of resolving a move against its target.
///
/// The amount is computed even on a miss; it is simply never applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedMove {
    pub outcome: HitOutcome,
    pub amount: u32,
}

/// Resolve a physical or magical move: hit roll first, then damage with jitter.
pub fn resolve_attack<R: RngOracle + ?Sized>(
    attacker: &Combatant,
    target: &Combatant,
    mv: &Move,
    rng: &mut R,
) -> ResolvedMove {
    let outcome = if check_hit(rng.unit(), mv.hit_chance) {
        HitOutcome::Hit
    } else {
        HitOutcome::Miss
    };

    let amount = calculate_damage(attacker, target, mv.multiplier, mv.is_magic(), roll_jitter(rng));

    ResolvedMove { outcome, amount }
}

/// Resolve a heal move. Heals always land.
pub fn resolve_heal<R: RngOracle + ?Sized>(
    healer: &Combatant,
    mv: &Move,
    rng: &mut R,
) -> ResolvedMove {
    ResolvedMove {
        outcome: HitOutcome::Hit,
        amount: calculate_heal(healer, mv.multiplier, roll_jitter(rng)),
    }
}
