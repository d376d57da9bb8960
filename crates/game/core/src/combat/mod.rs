//! Combat resolution system.
//!
//! This module provides the damage resolver: hit checks, the damage and heal
//! formulas, and wrappers that draw the required random values.
//!
//! # Architecture
//!
//! - **Pure Functions**: `calculate_*` and `check_hit` take their random
//!   inputs (jitter, roll) as parameters and are side-effect free
//! - **Resolvers**: `resolve_*` draw from an [`RngOracle`](crate::env::RngOracle)
//!   and return a [`ResolvedMove`]
//! - **No HP mutation**: amounts are applied later, when the action's
//!   animation completes
//!
//! # Core Functions
//!
//! - `resolve_attack`: hit roll + damage for physical and magical moves
//! - `resolve_heal`: heal amount for heal moves
//! - `calculate_damage`: `floor(max(1, stat * mult - defense) * jitter)`
//! - `calculate_heal`: `floor(magic * mult * jitter)`

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{calculate_damage, calculate_heal, roll_jitter};
pub use hit::check_hit;
pub use result::{HitOutcome, ResolvedMove, resolve_attack, resolve_heal};
