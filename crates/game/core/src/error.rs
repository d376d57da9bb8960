//! Error types for game-core.
//!
//! The rules have no recoverable failures: every move index and target comes
//! from a menu the engine built itself, and invariant violations panic. What
//! remains is input that arrives at the wrong moment. It is dropped without
//! touching state, and [`IgnoredInput`] says why so frontends can trace it.

use crate::input::InputCommand;
use crate::state::PhaseKind;

/// Reason an input command was ignored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IgnoredInput {
    #[error("{command:?} is not accepted during {phase}")]
    NotAccepted {
        command: InputCommand,
        phase: PhaseKind,
    },

    #[error("option {index} is out of range for a menu of {len}")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("no menu option is selected")]
    NothingSelected,
}
