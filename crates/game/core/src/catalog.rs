//! Static move catalog keyed by combatant class.
//!
//! Each party class owns exactly two moves; the boss has its own two-entry
//! list ([`BOSS_MOVES`]) that the engine picks from uniformly each boss turn.
//! Indices always come from menus the engine generated from this same table,
//! so an out-of-range lookup is a programming error and panics.
use crate::combatant::CombatantClass;
use crate::config::BattleConfig;

// ============================================================================
// Move Category
// ============================================================================

/// How a move resolves against its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MoveCategory {
    /// Scales with attack, reduced by defense.
    Physical,
    /// Scales with magic, reduced by defense.
    Magical,
    /// Scales with the healer's magic, ignores defense, targets an ally.
    Heal,
}

// ============================================================================
// Animation Kind
// ============================================================================

/// Visual effect played while an action is in flight.
///
/// Only the kind and its duration live here; presentation layers decide how
/// each kind looks. The engine blocks in the animation phase until the
/// duration has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum AnimationKind {
    /// Thin slash line travelling from attacker to target.
    Strike,
    /// Thick slash with a flash at the midpoint.
    HeavySlash,
    /// Small projectile.
    MagicMissile,
    /// Projectile that swells mid-flight.
    Fireball,
    /// Short staff swing.
    StaffStrike,
    /// Expanding aura on the heal target.
    HealingAura,
    /// Fast, thin strike.
    QuickStrike,
    /// Expanding flash on the target.
    Backstab,
    /// Large shockwave on the target.
    Smash,
    /// Spiralling orb.
    DarkBlast,
}

impl AnimationKind {
    /// Fixed playback duration in milliseconds.
    pub const fn duration_ms(self) -> u64 {
        match self {
            Self::Strike => 600,
            Self::HeavySlash => 800,
            Self::MagicMissile => 500,
            Self::Fireball => 700,
            Self::StaffStrike => 500,
            Self::HealingAura => 800,
            Self::QuickStrike => 400,
            Self::Backstab => 600,
            Self::Smash => 800,
            Self::DarkBlast => 700,
        }
    }
}

// ============================================================================
// Move
// ============================================================================

/// Immutable move definition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub name: &'static str,
    pub category: MoveCategory,
    pub multiplier: f64,
    /// Probability in `[0, 1]` that the move lands.
    pub hit_chance: f64,
    pub animation: AnimationKind,
}

impl Move {
    const fn new(
        name: &'static str,
        category: MoveCategory,
        multiplier: f64,
        hit_chance: f64,
        animation: AnimationKind,
    ) -> Self {
        Self {
            name,
            category,
            multiplier,
            hit_chance,
            animation,
        }
    }

    pub fn is_heal(&self) -> bool {
        self.category == MoveCategory::Heal
    }

    /// Magical moves scale with the magic stat instead of attack.
    pub fn is_magic(&self) -> bool {
        self.category == MoveCategory::Magical
    }
}

type MoveList = [Move; BattleConfig::MOVES_PER_CLASS];

const WARRIOR_MOVES: MoveList = [
    Move::new("Strike", MoveCategory::Physical, 1.0, 1.0, AnimationKind::Strike),
    Move::new("Heavy Slash", MoveCategory::Physical, 1.5, 0.75, AnimationKind::HeavySlash),
];

const MAGE_MOVES: MoveList = [
    Move::new("Magic Missile", MoveCategory::Magical, 1.0, 1.0, AnimationKind::MagicMissile),
    Move::new("Fireball", MoveCategory::Magical, 1.5, 1.0, AnimationKind::Fireball),
];

const HEALER_MOVES: MoveList = [
    Move::new("Attack", MoveCategory::Physical, 1.0, 1.0, AnimationKind::StaffStrike),
    Move::new("Heal", MoveCategory::Heal, 1.5, 1.0, AnimationKind::HealingAura),
];

const THIEF_MOVES: MoveList = [
    Move::new("Quick Strike", MoveCategory::Physical, 1.0, 1.0, AnimationKind::QuickStrike),
    Move::new("Backstab", MoveCategory::Physical, 2.0, 0.60, AnimationKind::Backstab),
];

/// Boss moves, chosen independently and uniformly each boss turn.
pub const BOSS_MOVES: MoveList = [
    Move::new("Smash", MoveCategory::Physical, 1.2, 1.0, AnimationKind::Smash),
    Move::new("Dark Blast", MoveCategory::Magical, 1.2, 1.0, AnimationKind::DarkBlast),
];

/// Ordered move list for a class.
pub fn moves(class: CombatantClass) -> &'static MoveList {
    match class {
        CombatantClass::Warrior => &WARRIOR_MOVES,
        CombatantClass::Mage => &MAGE_MOVES,
        CombatantClass::Healer => &HEALER_MOVES,
        CombatantClass::Thief => &THIEF_MOVES,
        CombatantClass::Boss => &BOSS_MOVES,
    }
}

/// Move at `index` in the class list.
///
/// # Panics
///
/// Panics if `index >= BattleConfig::MOVES_PER_CLASS`.
pub fn move_at(class: CombatantClass, index: usize) -> &'static Move {
    &moves(class)[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_class_has_two_moves_with_valid_hit_chance() {
        for class in CombatantClass::iter() {
            let list = moves(class);
            assert_eq!(list.len(), 2, "{class} should have two moves");
            for mv in list {
                assert!((0.0..=1.0).contains(&mv.hit_chance), "{}", mv.name);
                assert!(mv.multiplier > 0.0, "{}", mv.name);
            }
        }
    }

    #[test]
    fn only_the_healer_carries_a_heal() {
        for class in CombatantClass::iter() {
            let heals = moves(class).iter().filter(|mv| mv.is_heal()).count();
            let expected = usize::from(class == CombatantClass::Healer);
            assert_eq!(heals, expected, "{class}");
        }
    }

    #[test]
    fn lookup_is_stable_by_index() {
        assert_eq!(move_at(CombatantClass::Thief, 1).name, "Backstab");
        assert_eq!(move_at(CombatantClass::Thief, 1).hit_chance, 0.60);
        assert_eq!(move_at(CombatantClass::Mage, 1).name, "Fireball");
        assert!(move_at(CombatantClass::Mage, 1).is_magic());
    }

    #[test]
    fn boss_moves_always_hit() {
        assert_eq!(BOSS_MOVES[0].name, "Smash");
        assert_eq!(BOSS_MOVES[1].category, MoveCategory::Magical);
        assert!(BOSS_MOVES.iter().all(|mv| mv.hit_chance == 1.0 && mv.multiplier == 1.2));
    }

    #[test]
    fn animation_durations_are_positive() {
        for kind in AnimationKind::iter() {
            assert!(kind.duration_ms() > 0, "{kind}");
        }
        assert_eq!(AnimationKind::QuickStrike.duration_ms(), 400);
        assert_eq!(AnimationKind::HealingAura.duration_ms(), 800);
    }

    #[test]
    #[should_panic]
    fn out_of_range_lookup_panics() {
        let _ = move_at(CombatantClass::Warrior, 2);
    }
}
