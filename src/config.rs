//! Startup configuration from environment variables.
//!
//! - `SCHULTE_SIZE`: initial board side, 3-7 (default: 5)
//! - `SCHULTE_ALPHABET`: `english` or `ukrainian` (default: english)
//! - `SCHULTE_COLOR_MODE`: set to "1" or "true" to start with colored cells
//! - `SCHULTE_SEED`: fixed RNG seed for reproducible boards
//! - `SCHULTE_LOG_PATH`: file to write logs to (logging is off when unset)
//!
//! Invalid values fall back to the defaults.

use std::env;
use std::path::PathBuf;

use crate::core::Settings;
use crate::types::{Alphabet, BoardSize};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub settings: Settings,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup("SCHULTE_SIZE")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .and_then(BoardSize::from_side)
            .unwrap_or_default();

        let alphabet = lookup("SCHULTE_ALPHABET")
            .and_then(|s| Alphabet::from_str(&s))
            .unwrap_or_default();

        let color_mode = lookup("SCHULTE_COLOR_MODE")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let seed = lookup("SCHULTE_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("SCHULTE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self {
            settings: Settings {
                size,
                alphabet,
                color_mode,
            },
            seed,
            log_path,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(config(&[]).settings.size.side(), 5);
    }

    #[test]
    fn reads_every_variable() {
        let c = config(&[
            ("SCHULTE_SIZE", "7"),
            ("SCHULTE_ALPHABET", "Ukrainian"),
            ("SCHULTE_COLOR_MODE", "TRUE"),
            ("SCHULTE_SEED", "42"),
            ("SCHULTE_LOG_PATH", " /tmp/schulte.log "),
        ]);
        assert_eq!(c.settings.size.side(), 7);
        assert_eq!(c.settings.alphabet, Alphabet::Ukrainian);
        assert!(c.settings.color_mode);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/schulte.log")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[
            ("SCHULTE_SIZE", "9"),
            ("SCHULTE_ALPHABET", "greek"),
            ("SCHULTE_COLOR_MODE", "yes"),
            ("SCHULTE_SEED", "-1"),
            ("SCHULTE_LOG_PATH", "   "),
        ]);
        assert_eq!(c, AppConfig::default());
    }
}
