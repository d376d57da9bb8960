//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use game_core::BattleSession;

/// Builder for constructing a Client with proper validation.
///
/// Both the session and the frontend are required; a missing one fails
/// `build()` instead of panicking later.
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<BattleSession>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the battle session (required).
    ///
    /// Usually built by `FrontendConfig::session()` so the configured seed is honored.
    pub fn session(mut self, session: BattleSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the session or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let session = self
            .session
            .context("Session is required. Use .session() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { session, frontend })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use game_core::{BattleConfig, InputCommand, PhaseKind};

    use super::*;

    /// Drives the session a few frames and records the phase it ends in.
    struct Headless {
        seen: Arc<Mutex<Option<PhaseKind>>>,
    }

    #[async_trait]
    impl Frontend for Headless {
        async fn run(&mut self, mut session: BattleSession) -> Result<()> {
            session.tick(0);
            session.handle_input(InputCommand::Confirm, 0);
            *self.seen.lock().unwrap() = Some(session.state().phase_kind());
            Ok(())
        }
    }

    #[test]
    fn build_requires_session_and_frontend() {
        let missing_session = ClientBuilder::new()
            .frontend(Headless {
                seen: Arc::default(),
            })
            .build();
        assert!(missing_session.is_err());

        let missing_frontend = ClientBuilder::new()
            .session(BattleSession::seeded(BattleConfig::default(), 1))
            .build();
        assert!(missing_frontend.is_err());
    }

    #[tokio::test]
    async fn run_hands_the_session_to_the_frontend() {
        let seen = Arc::new(Mutex::new(None));
        let client = Client::builder()
            .session(BattleSession::seeded(BattleConfig::default(), 7))
            .frontend(Headless { seen: seen.clone() })
            .build()
            .unwrap();

        client.run().await.unwrap();

        assert_eq!(*seen.lock().unwrap(), Some(PhaseKind::Animation));
    }
}
