//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16)
    /// - `CLI_LOG_PANEL_HEIGHT` - Combat log panel height in lines (default: 7)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.clamp(1, 1_000);
        }

        if let Some(height) = read_env::<u16>("CLI_LOG_PANEL_HEIGHT") {
            config.ui.log_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and timing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Delay between frames; each frame ticks the battle once.
    pub frame_interval_ms: u64,
    /// Height of the combat log panel in lines (including borders).
    pub log_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            log_panel_height: 7,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, %value, "ignoring malformed setting");
    }
    parsed
}
