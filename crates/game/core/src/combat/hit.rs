//! Hit determination.

/// Check if a move lands.
///
/// # Arguments
///
/// * `roll` - Uniform draw in `[0, 1)`
/// * `hit_chance` - Move hit chance in `[0, 1]`
///
/// # Returns
///
/// `true` iff `roll <= hit_chance`.
pub fn check_hit(roll: f64, hit_chance: f64) -> bool {
    roll <= hit_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_moves_always_hit() {
        assert!(check_hit(0.0, 1.0));
        assert!(check_hit(0.999_999, 1.0));
    }

    #[test]
    fn roll_equal_to_chance_hits() {
        assert!(check_hit(0.60, 0.60));
    }

    #[test]
    fn roll_above_chance_misses() {
        assert!(!check_hit(0.61, 0.60));
        assert!(!check_hit(0.76, 0.75));
    }
}
