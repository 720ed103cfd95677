//! Runtime settings, read from the environment once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `DINE_GEMINI_MODEL` | `gemini-3-flash-preview` |
//! | `DINE_GEMINI_ENDPOINT` | `https://generativelanguage.googleapis.com/v1beta` |
//! | `DINE_API_KEY_VAR` | `API_KEY` |
//! | `DINE_AI_TIMEOUT_SECS` | `20` |
//! | `DINE_STORE_BUFFER` | `32` |
//!
//! `DINE_API_KEY_VAR` names the variable that holds the credential; the credential itself is
//! only read when a conflict check runs.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 20;
const DEFAULT_STORE_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub api_key_var: String,
    pub ai_timeout: Duration,
    /// Request channel capacity for each store.
    pub store_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            ai_timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            store_buffer: DEFAULT_STORE_BUFFER,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing or unparsable values use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            gemini_model: try_load(&lookup, "DINE_GEMINI_MODEL", DEFAULT_MODEL.to_string()),
            gemini_endpoint: try_load(&lookup, "DINE_GEMINI_ENDPOINT", DEFAULT_ENDPOINT.to_string()),
            api_key_var: try_load(&lookup, "DINE_API_KEY_VAR", DEFAULT_API_KEY_VAR.to_string()),
            ai_timeout: Duration::from_secs(try_load(
                &lookup,
                "DINE_AI_TIMEOUT_SECS",
                DEFAULT_AI_TIMEOUT_SECS,
            )),
            store_buffer: try_load(&lookup, "DINE_STORE_BUFFER", DEFAULT_STORE_BUFFER).max(1),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn values_are_read_and_bad_ones_ignored() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DINE_GEMINI_MODEL", "gemini-pro"),
            ("DINE_API_KEY_VAR", "GEMINI_KEY"),
            ("DINE_AI_TIMEOUT_SECS", "soon"),
            ("DINE_STORE_BUFFER", " 8 "),
        ]));
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.api_key_var, "GEMINI_KEY");
        assert_eq!(config.ai_timeout, Duration::from_secs(20));
        assert_eq!(config.store_buffer, 8);
    }

    #[test]
    fn zero_buffer_is_raised_to_one() {
        let config = AppConfig::from_lookup(lookup(&[("DINE_STORE_BUFFER", "0")]));
        assert_eq!(config.store_buffer, 1);
    }
}
