use std::{env, fmt::Display, str::FromStr};

use chrono::{FixedOffset, Offset, Utc};
use tracing::{info, warn};

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the backend endpoints (`user-info`, `get-all-events`, ...) live under.
    pub backend_url: String,
    pub port: u16,
    /// Offset event times are displayed in, in minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            port: DEFAULT_PORT,
            utc_offset_minutes: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
            port: load_or("PORT", defaults.port),
            utc_offset_minutes: load_or("DISPLAY_UTC_OFFSET_MINUTES", defaults.utc_offset_minutes),
        }
    }

    /// Falls back to UTC when the configured offset is out of range.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    minutes = self.utc_offset_minutes,
                    "Display offset out of range, using UTC"
                );
                Utc.fix()
            })
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.backend_url, "http://localhost:8080/");
        assert_eq!(config.utc_offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_utc_offset() {
        let config = Config {
            utc_offset_minutes: -240,
            ..Config::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), -4 * 3600);

        let config = Config {
            utc_offset_minutes: 100_000,
            ..Config::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), 0);

        // Too large to convert to seconds at all.
        let config = Config {
            utc_offset_minutes: 40_000_000,
            ..Config::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_load_or_falls_back_on_invalid_value() {
        std::env::set_var("EVENT_BOARD_TEST_PORT", "not-a-port");
        assert_eq!(load_or("EVENT_BOARD_TEST_PORT", 3001u16), 3001);

        std::env::set_var("EVENT_BOARD_TEST_PORT", "4000");
        assert_eq!(load_or("EVENT_BOARD_TEST_PORT", 3001u16), 4000);
        std::env::remove_var("EVENT_BOARD_TEST_PORT");
    }
}
