//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::BattleSession;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the session for as long as it runs: it ticks the battle
/// once per frame, forwards player input, and renders from the read-only
/// state. The rules never depend on how (or whether) anything is drawn.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use game_core::{BattleSession, InputCommand};
///
/// struct AutoConfirm;
///
/// #[async_trait]
/// impl Frontend for AutoConfirm {
///     async fn run(&mut self, mut session: BattleSession) -> Result<()> {
///         let mut now = 0;
///         while !session.state().is_over() {
///             session.tick(now);
///             session.handle_input(InputCommand::Confirm, now);
///             now += 16;
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal I/O error.
    async fn run(&mut self, session: BattleSession) -> Result<()>;
}
