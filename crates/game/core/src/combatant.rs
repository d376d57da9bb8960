//! Combatant model: class tags, the class stat table, and HP mutation.
//!
//! A single [`Combatant`] record covers both party members and the boss; the
//! [`CombatantClass`] tag selects base stats here and the move list in
//! [`crate::catalog`]. HP only changes through [`Combatant::take_damage`] and
//! [`Combatant::heal`], which keep `0 <= hp <= max_hp` and `alive == (hp > 0)`.
use std::fmt;

use crate::config::BattleConfig;

// ============================================================================
// Identity
// ============================================================================

/// Stable identifier of a combatant within one battle.
///
/// Ids follow insertion order: the boss first, then the party in its fixed
/// order. The turn scheduler relies on this for its tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombatantId(pub u8);

impl CombatantId {
    /// Reserved identifier for the boss.
    pub const BOSS: Self = Self(0);

    /// Identifier of the party member in `slot` (0-based).
    #[inline]
    pub const fn party(slot: usize) -> Self {
        Self(slot as u8 + 1)
    }

    #[inline]
    pub const fn is_boss(self) -> bool {
        self.0 == Self::BOSS.0
    }

    /// Party slot for party members, `None` for the boss.
    #[inline]
    pub const fn party_slot(self) -> Option<usize> {
        if self.is_boss() {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Classes
// ============================================================================

/// Class tag selecting base stats and the move list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
pub enum CombatantClass {
    Warrior,
    Mage,
    Healer,
    Thief,
    #[strum(to_string = "Final Boss")]
    Boss,
}

impl CombatantClass {
    /// Party classes in their fixed battle order.
    pub const PARTY: [Self; BattleConfig::PARTY_SIZE] =
        [Self::Warrior, Self::Mage, Self::Healer, Self::Thief];

    /// Display name used in menus and log lines.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Base stats for this class.
    pub const fn stats(self) -> ClassStats {
        match self {
            Self::Warrior => ClassStats::new(120, 25, 15, 5, 8),
            Self::Mage => ClassStats::new(80, 10, 8, 30, 12),
            Self::Healer => ClassStats::new(90, 8, 10, 25, 10),
            Self::Thief => ClassStats::new(70, 15, 10, 5, 20),
            Self::Boss => ClassStats::new(300, 30, 20, 20, 15),
        }
    }
}

/// Row of the class stat table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub speed: u32,
}

impl ClassStats {
    pub const fn new(max_hp: u32, attack: u32, defense: u32, magic: u32, speed: u32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
            magic,
            speed,
        }
    }
}

// ============================================================================
// Combatant
// ============================================================================

/// A party member or the boss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: CombatantId,
    pub class: CombatantClass,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub speed: u32,
    hp: u32,
    alive: bool,
}

impl Combatant {
    /// Creates a combatant at full HP with its class defaults.
    pub fn new(id: CombatantId, class: CombatantClass) -> Self {
        Self::with_stats(id, class, class.stats())
    }

    /// Creates a combatant at full HP with explicit stats.
    pub fn with_stats(id: CombatantId, class: CombatantClass, stats: ClassStats) -> Self {
        Self {
            id,
            class,
            max_hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            magic: stats.magic,
            speed: stats.speed,
            hp: stats.max_hp,
            alive: stats.max_hp > 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_boss(&self) -> bool {
        self.id.is_boss()
    }

    /// Menu label in the form `Name (hp/max_hp)`.
    pub fn hp_label(&self) -> String {
        format!("{} ({}/{})", self.name(), self.hp, self.max_hp)
    }

    /// Reduces HP, clamping at zero. Idempotent once the combatant is down.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
        self.alive = self.hp > 0;
    }

    /// Restores HP, capped at `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.alive = self.hp > 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> Combatant {
        Combatant::new(CombatantId::party(0), CombatantClass::Warrior)
    }

    #[test]
    fn class_defaults_match_stat_table() {
        let mage = Combatant::new(CombatantId::party(1), CombatantClass::Mage);
        assert_eq!(mage.hp(), 80);
        assert_eq!(mage.max_hp, 80);
        assert_eq!(mage.magic, 30);
        assert_eq!(mage.speed, 12);
        assert!(mage.is_alive());
    }

    #[test]
    fn boss_uses_final_boss_name() {
        let boss = Combatant::new(CombatantId::BOSS, CombatantClass::Boss);
        assert_eq!(boss.name(), "Final Boss");
        assert!(boss.is_boss());
        assert_eq!(boss.id.party_slot(), None);
    }

    #[test]
    fn party_ids_follow_slot_order() {
        assert_eq!(CombatantId::party(0), CombatantId(1));
        assert_eq!(CombatantId::party(3).party_slot(), Some(3));
        assert!(CombatantId::BOSS < CombatantId::party(0));
    }

    #[test]
    fn damage_clamps_at_zero_and_kills() {
        let mut w = warrior();
        w.take_damage(500);
        assert_eq!(w.hp(), 0);
        assert!(!w.is_alive());

        w.take_damage(10);
        assert_eq!(w.hp(), 0);
        assert!(!w.is_alive());
    }

    #[test]
    fn exact_lethal_damage_kills() {
        let mut w = warrior();
        w.take_damage(120);
        assert_eq!(w.hp(), 0);
        assert!(!w.is_alive());
    }

    #[test]
    fn heal_caps_at_max_hp() {
        let mut w = warrior();
        w.take_damage(30);
        w.heal(1_000);
        assert_eq!(w.hp(), 120);
        assert!(w.is_alive());
    }

    #[test]
    fn heal_on_downed_combatant_still_caps() {
        let mut w = warrior();
        w.take_damage(200);
        w.heal(u32::MAX);
        assert_eq!(w.hp(), w.max_hp);
        assert_eq!(w.is_alive(), w.hp() > 0);
    }

    #[test]
    fn hp_label_shows_fraction() {
        let mut w = warrior();
        w.take_damage(20);
        assert_eq!(w.hp_label(), "Warrior (100/120)");
    }
}
