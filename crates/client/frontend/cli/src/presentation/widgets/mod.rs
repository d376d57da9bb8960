//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the BattleView and renders to a terminal frame.
//! Widgets follow these principles:
//! - Read-only access to the view model (immutable)
//! - No side effects or state mutations
//! - Framework-specific (Ratatui) but styled through PresentationMapper where applicable

pub mod banner;
pub mod battlefield;
pub mod footer;
pub mod header;
pub mod log;
pub mod menu;
