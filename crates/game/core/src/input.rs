//! Discrete input commands supplied by presentation layers.
use crate::error::IgnoredInput;

/// Input understood by the battle state machine.
///
/// Menu commands apply during move and target selection; `Restart` (and
/// `Confirm`) apply once the battle has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputCommand {
    /// Select the option at this index and confirm it.
    SelectOption(usize),
    MoveUp,
    MoveDown,
    Confirm,
    Restart,
}

/// What happened to an input command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Applied,
    Ignored(IgnoredInput),
}

impl InputOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<Result<(), IgnoredInput>> for InputOutcome {
    fn from(result: Result<(), IgnoredInput>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(reason) => Self::Ignored(reason),
        }
    }
}
