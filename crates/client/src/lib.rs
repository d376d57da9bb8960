//! Top-level client wiring a battle session to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ BattleSession (rules, state and randomness)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The session owns every rule; the frontend only ticks it, forwards input
//! and renders what it reads back.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use game_core::BattleSession;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the session and the frontend
/// 2. Client::run() hands the session to the frontend (blocking until the user quits)
pub struct Client {
    session: BattleSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns whatever error the frontend reports (terminal setup, I/O).
    pub async fn run(self) -> Result<()> {
        let mut frontend = self.frontend;
        let result = frontend.run(self.session).await;

        if let Err(e) = &result {
            tracing::error!("Frontend error: {}", e);
        }

        result
    }
}
