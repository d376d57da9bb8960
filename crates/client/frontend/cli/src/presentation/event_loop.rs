//! Drives the battle clock, user input, and rendering for the CLI client.
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::config::UiConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use client_frontend_core::BattleView;
use game_core::BattleSession;

pub struct EventLoop {
    session: BattleSession,
    input: InputHandler,
    config: UiConfig,
    started: Instant,
}

impl EventLoop {
    pub fn new(session: BattleSession, config: UiConfig) -> Self {
        Self {
            session,
            input: InputHandler,
            config,
            started: Instant::now(),
        }
    }

    /// Run frames until the player quits, handing the session back.
    ///
    /// Each frame ticks the battle once with the elapsed time, applies any
    /// pending key presses, and redraws.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<BattleSession> {
        let mut frames = time::interval(Duration::from_millis(self.config.frame_interval_ms));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            let now = self.now_ms();
            self.session.tick(now);

            if self.drain_input(now)? {
                break;
            }

            self.render(terminal, now)?;
        }

        Ok(self.session)
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns `true` when the player asked to quit.
    fn drain_input(&mut self, now_ms: u64) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key, now_ms) {
                        return Ok(true);
                    }
                }
                _ => {}
            }
        }

        Ok(false)
    }

    fn handle_key_press(&mut self, key: KeyEvent, now_ms: u64) -> bool {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                true
            }
            KeyAction::Submit(command) => {
                self.session.handle_input(command, now_ms);
                false
            }
            KeyAction::None => false,
        }
    }

    fn render(&self, terminal: &mut Tui, now_ms: u64) -> Result<()> {
        let view = BattleView::from_state(self.session.state(), now_ms);
        let ctx = RenderContext {
            view: &view,
            log_panel_height: self.config.log_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}
