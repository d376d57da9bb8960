//! Glue code tying the battle session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};
use client_frontend_core::{Frontend, FrontendConfig};
use game_core::BattleSession;

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    async fn execute(&self, session: BattleSession) -> Result<()> {
        tracing::info!(
            seed = ?self.frontend_config.seed,
            frame_interval_ms = self.cli_config.ui.frame_interval_ms,
            "CLI client starting..."
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(session, self.cli_config.ui.clone());
        let session = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            phase = %session.state().phase_kind(),
            "CLI client exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: BattleSession) -> Result<()> {
        self.execute(session).await
    }
}
