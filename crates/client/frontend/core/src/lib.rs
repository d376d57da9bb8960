//! Cross-frontend primitives for presenting a battle.
//!
//! Houses the frontend trait, configuration shared by every frontend, and the
//! per-frame view model that terminal and future graphical clients render.
pub mod config;
pub mod frontend;
pub mod view_model;

pub use config::{ConfigError, FrontendConfig};
pub use frontend::Frontend;
pub use view_model::{
    BattleView, CombatantView, EffectView, LogTone, MenuView, PresentationMapper,
};
