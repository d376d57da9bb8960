//! Frontend configuration structures and loaders.
//!
//! Settings shared by every frontend implementation: how the battle session
//! is seeded and sized, and how the log session is named.

use std::env;

use game_core::{BattleConfig, BattleSession};
use tracing::debug;

/// Malformed configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    /// Seed for a reproducible battle; entropy when unset.
    pub seed: Option<u64>,
    /// Name of the log session directory; timestamped when unset.
    pub session_id: Option<String>,
    pub battle: BattleConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - RNG seed (default: OS entropy)
    /// - `BATTLE_SESSION_ID` - Log session name (default: timestamp)
    /// - `BATTLE_LOG_CAPACITY` - Combat log lines kept (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        let battle = match read_env::<usize>("BATTLE_LOG_CAPACITY")? {
            Some(capacity) => BattleConfig::with_log_capacity(capacity),
            None => BattleConfig::default(),
        };

        let config = Self {
            seed: read_env::<u64>("BATTLE_SEED")?,
            session_id: env::var("BATTLE_SESSION_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            battle,
        };

        debug!(
            seed = ?config.seed,
            session_id = ?config.session_id,
            log_capacity = config.battle.log_capacity,
            "frontend config loaded"
        );
        Ok(config)
    }

    /// Builds the battle session described by this configuration.
    pub fn session(&self) -> BattleSession {
        match self.seed {
            Some(seed) => BattleSession::seeded(self.battle.clone(), seed),
            None => {
                debug!("no BATTLE_SEED set, seeding battle from entropy");
                BattleSession::from_entropy(self.battle.clone())
            }
        }
    }
}

fn read_env<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    parse_value(key, env::var(key).ok())
}

fn parse_value<T>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_values_fall_back() {
        assert_eq!(parse_value::<u64>("BATTLE_SEED", None), Ok(None));
        assert_eq!(parse_value::<u64>("BATTLE_SEED", Some("  ".into())), Ok(None));
    }

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(
            parse_value::<u64>("BATTLE_SEED", Some(" 42 ".into())),
            Ok(Some(42))
        );
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = parse_value::<u64>("BATTLE_SEED", Some("forty".into())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "BATTLE_SEED has invalid value \"forty\""
        );
    }

    #[test]
    fn seeded_sessions_start_identically() {
        let config = FrontendConfig {
            seed: Some(3),
            ..FrontendConfig::default()
        };
        let mut a = config.session();
        let mut b = config.session();
        a.tick(0);
        b.tick(0);
        assert_eq!(a.state().turn_queue(), b.state().turn_queue());
        assert_eq!(a.state().phase_kind(), b.state().phase_kind());
    }

    #[test]
    fn unseeded_session_uses_configured_log_capacity() {
        let config = FrontendConfig {
            battle: BattleConfig::with_log_capacity(2),
            ..FrontendConfig::default()
        };
        let session = config.session();
        assert_eq!(session.state().log().capacity(), 2);
        assert!(session.state().log().is_empty());
    }
}
