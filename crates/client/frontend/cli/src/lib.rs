//! Terminal UI frontend for the battle.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait for pure UI
//! rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the battle session to drive
//! - Ticks it once per frame and forwards mapped key presses
//! - Renders a view model built from the read-only state

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
