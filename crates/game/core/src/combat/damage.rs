//! Damage and heal amount calculation.

use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::env::RngOracle;

/// Calculate damage for a physical or magical move.
///
/// # Formula
///
/// ```text
/// stat = is_magic ? attacker.magic : attacker.attack
/// base = max(1, stat * multiplier - target.defense)
/// damage = floor(base * jitter)
/// ```
///
/// # Arguments
///
/// * `attacker` - Combatant using the move
/// * `target` - Combatant receiving the move
/// * `multiplier` - Move damage multiplier
/// * `is_magic` - Scale with magic instead of attack
/// * `jitter` - Uniform draw in `[JITTER_MIN, JITTER_MAX]`
pub fn calculate_damage(
    attacker: &Combatant,
    target: &Combatant,
    multiplier: f64,
    is_magic: bool,
    jitter: f64,
) -> u32 {
    let stat = if is_magic {
        attacker.magic
    } else {
        attacker.attack
    };

    let base = (f64::from(stat) * multiplier - f64::from(target.defense)).max(1.0);
    (base * jitter).floor() as u32
}

/// Calculate the amount restored by a heal move.
///
/// Uses the healer's magic only: no defense term and no floor at 1.
///
/// ```text
/// heal = floor(healer.magic * multiplier * jitter)
/// ```
pub fn calculate_heal(healer: &Combatant, multiplier: f64, jitter: f64) -> u32 {
    (f64::from(healer.magic) * multiplier * jitter).floor() as u32
}

/// Draw a jitter factor, independent per call.
pub fn roll_jitter<R: RngOracle + ?Sized>(rng: &mut R) -> f64 {
    rng.uniform(BattleConfig::JITTER_MIN, BattleConfig::JITTER_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{CombatantClass, CombatantId};

    fn mage() -> Combatant {
        Combatant::new(CombatantId::party(1), CombatantClass::Mage)
    }

    fn boss() -> Combatant {
        Combatant::new(CombatantId::BOSS, CombatantClass::Boss)
    }

    #[test]
    fn fireball_on_boss_spans_jitter_bounds() {
        // magic 30 * 1.5 - defense 20 = 25
        let low = calculate_damage(&mage(), &boss(), 1.5, true, BattleConfig::JITTER_MIN);
        let mid = calculate_damage(&mage(), &boss(), 1.5, true, 1.0);
        let high = calculate_damage(&mage(), &boss(), 1.5, true, BattleConfig::JITTER_MAX);
        assert_eq!(low, 21);
        assert_eq!(mid, 25);
        assert_eq!(high, 28);
    }

    #[test]
    fn physical_moves_use_attack() {
        // attack 10 * 1.0 - 20 -> floored to base 1
        let dmg = calculate_damage(&mage(), &boss(), 1.0, false, 1.0);
        assert_eq!(dmg, 1);
    }

    #[test]
    fn base_never_drops_below_one() {
        let mut weak = mage();
        weak.magic = 0;
        let dmg = calculate_damage(&weak, &boss(), 1.5, true, BattleConfig::JITTER_MAX);
        assert_eq!(dmg, 1);
    }

    #[test]
    fn heal_ignores_defense() {
        let healer = Combatant::new(CombatantId::party(2), CombatantClass::Healer);
        // magic 25 * 1.5 = 37.5
        assert_eq!(calculate_heal(&healer, 1.5, 1.0), 37);
        assert_eq!(calculate_heal(&healer, 1.5, BattleConfig::JITTER_MIN), 31);
        assert_eq!(calculate_heal(&healer, 1.5, BattleConfig::JITTER_MAX), 43);
    }

    #[test]
    fn heal_has_no_floor_at_one() {
        let mut healer = Combatant::new(CombatantId::party(2), CombatantClass::Healer);
        healer.magic = 0;
        assert_eq!(calculate_heal(&healer, 1.5, 1.0), 0);
    }
}
