//! A running battle: state plus the random source it draws from.
use tracing::{debug, info};

use crate::config::BattleConfig;
use crate::engine::BattleEngine;
use crate::env::{RngOracle, StdRngOracle};
use crate::input::{InputCommand, InputOutcome};
use crate::state::BattleState;

/// Owns one battle and its generator.
///
/// Frontends hold a session, call [`tick`](Self::tick) every frame, forward
/// input through [`handle_input`](Self::handle_input), and render from
/// [`state`](Self::state).
#[derive(Debug)]
pub struct BattleSession<R: RngOracle = StdRngOracle> {
    state: BattleState,
    rng: R,
}

impl BattleSession<StdRngOracle> {
    /// New battle with an entropy-seeded generator.
    pub fn from_entropy(config: BattleConfig) -> Self {
        Self::new(config, StdRngOracle::from_entropy())
    }

    /// New battle with a reproducible generator.
    pub fn seeded(config: BattleConfig, seed: u64) -> Self {
        info!(seed, "using seeded generator");
        Self::new(config, StdRngOracle::seeded(seed))
    }
}

impl<R: RngOracle> BattleSession<R> {
    pub fn new(config: BattleConfig, rng: R) -> Self {
        info!(log_capacity = config.log_capacity, "battle started");
        Self {
            state: BattleState::new(config),
            rng,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Borrows an engine over this session.
    pub fn engine(&mut self) -> BattleEngine<'_, R> {
        BattleEngine::new(&mut self.state, &mut self.rng)
    }

    /// Runs one frame at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        self.engine().tick(now_ms);
    }

    /// Forwards an input command, tracing it when ignored.
    pub fn handle_input(&mut self, command: InputCommand, now_ms: u64) -> InputOutcome {
        let outcome = InputOutcome::from(self.engine().handle_input(command, now_ms));
        if let InputOutcome::Ignored(reason) = &outcome {
            debug!(%reason, "input ignored");
        }
        outcome
    }

    pub fn restart(&mut self) {
        self.engine().restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IgnoredInput;
    use crate::state::PhaseKind;

    #[test]
    fn first_tick_gives_the_thief_a_menu() {
        let mut session = BattleSession::seeded(BattleConfig::default(), 7);
        session.tick(0);

        assert_eq!(session.state().phase_kind(), PhaseKind::PlayerChoice);
        let menu = session.state().menu().expect("menu");
        assert_eq!(menu.prompt, "Thief's turn: Choose an action:");
        let labels: Vec<_> = menu.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Quick Strike", "Backstab"]);
    }

    #[test]
    fn restart_is_ignored_mid_battle() {
        let mut session = BattleSession::seeded(BattleConfig::default(), 7);
        session.tick(0);

        let outcome = session.handle_input(InputCommand::Restart, 0);
        assert_eq!(
            outcome,
            InputOutcome::Ignored(IgnoredInput::NotAccepted {
                command: InputCommand::Restart,
                phase: PhaseKind::PlayerChoice,
            })
        );
    }
}
