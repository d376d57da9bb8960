//! Battle rules shared by every frontend.
//!
//! `game-core` defines the canonical rules of the party-versus-boss battle
//! (combatants, move catalog, damage resolution, turn scheduling and the
//! battle state machine) and exposes them through pure, frame-driven APIs.
//! All state mutation flows through [`engine::BattleEngine`], usually driven
//! by a [`session::BattleSession`] that owns the state and the random source.
pub mod catalog;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod input;
pub mod session;
pub mod state;

pub use catalog::{AnimationKind, BOSS_MOVES, Move, MoveCategory};
pub use combat::{HitOutcome, ResolvedMove};
pub use combatant::{ClassStats, Combatant, CombatantClass, CombatantId};
pub use config::BattleConfig;
pub use engine::{BattleEngine, recalc_queue};
pub use env::{RngOracle, StdRngOracle};
pub use error::IgnoredInput;
pub use input::{InputCommand, InputOutcome};
pub use session::BattleSession;
pub use state::{
    Action, AnimationTimer, BattleLog, BattlePhase, BattleState, Menu, MenuChoice, MenuOption,
    PhaseKind, TurnQueue, TurnState,
};
