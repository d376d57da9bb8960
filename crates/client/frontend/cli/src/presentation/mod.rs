//! Terminal presentation components used by the CLI client.
pub mod animation;
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
