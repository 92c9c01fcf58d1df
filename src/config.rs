//! Server configuration from environment variables.
//!
//! HOST (default 0.0.0.0), PORT (default 8080), INACTIVITY_TIMEOUT_HOURS (default 12),
//! DEFAULT_MAX_ROUNDS (unset: tournaments have no round limit unless they ask for one).
//! Values that fail to parse fall back to the default.

use crate::models::TournamentSettings;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_INACTIVITY_HOURS: u64 = 12;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments not accessed for this long are removed from memory.
    pub inactivity_timeout: Duration,
    /// Round limit for tournaments created without one.
    pub default_max_rounds: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_HOURS * 3600),
            default_max_rounds: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let inactivity_timeout = lookup("INACTIVITY_TIMEOUT_HOURS")
            .and_then(|h| h.trim().parse::<u64>().ok())
            .and_then(|h| h.checked_mul(3600))
            .map(Duration::from_secs)
            .unwrap_or(defaults.inactivity_timeout);
        let default_max_rounds = lookup("DEFAULT_MAX_ROUNDS")
            .and_then(|r| r.trim().parse::<u32>().ok())
            .filter(|&r| r > 0);
        Self {
            host,
            port,
            inactivity_timeout,
            default_max_rounds,
        }
    }

    /// Settings for a new tournament. A zero round limit or terrain count counts as unset;
    /// without a limit the configured default applies.
    pub fn tournament_settings(
        &self,
        max_rounds: Option<u32>,
        terrain_count: Option<u32>,
    ) -> TournamentSettings {
        TournamentSettings {
            max_rounds: max_rounds
                .filter(|&r| r > 0)
                .or(self.default_max_rounds),
            terrain_count: terrain_count.filter(|&c| c > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let c = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("INACTIVITY_TIMEOUT_HOURS", "2"),
            ("DEFAULT_MAX_ROUNDS", "5"),
        ]);
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 9000);
        assert_eq!(c.inactivity_timeout, Duration::from_secs(7200));
        assert_eq!(c.default_max_rounds, Some(5));
    }

    #[test]
    fn unparseable_values_fall_back() {
        let c = config_from(&[("PORT", "eighty"), ("DEFAULT_MAX_ROUNDS", "0")]);
        assert_eq!(c.port, 8080);
        assert_eq!(c.default_max_rounds, None);
    }

    #[test]
    fn huge_inactivity_timeout_falls_back() {
        let hours = u64::MAX.to_string();
        let c = config_from(&[("INACTIVITY_TIMEOUT_HOURS", hours.as_str())]);
        assert_eq!(c.inactivity_timeout, ServerConfig::default().inactivity_timeout);
    }

    #[test]
    fn zero_round_limit_is_ignored() {
        let c = config_from(&[("DEFAULT_MAX_ROUNDS", "4")]);
        assert_eq!(c.tournament_settings(Some(0), Some(0)).max_rounds, Some(4));
        assert_eq!(c.tournament_settings(Some(0), Some(0)).terrain_count, None);
        assert_eq!(c.tournament_settings(Some(6), Some(2)).max_rounds, Some(6));

        let no_default = ServerConfig::default();
        assert_eq!(no_default.tournament_settings(Some(0), None).max_rounds, None);
        assert_eq!(no_default.tournament_settings(None, Some(3)).terrain_count, Some(3));
    }
}
