//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

/// Top-level service configuration.
///
/// Loaded once at startup via [`StagelinkConfig::from_env`].
#[derive(Debug, Clone)]
pub struct StagelinkConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3001`).
    pub listen_addr: SocketAddr,

    /// Capacity of the hub command queue. Producers await free slots, so
    /// this bounds how far connections can run ahead of the hub.
    pub hub_queue_capacity: usize,
}

impl StagelinkConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3001".to_string())
            .parse()?;

        let hub_queue_capacity = parse_env("HUB_QUEUE_CAPACITY", 1024);

        Ok(Self {
            listen_addr,
            hub_queue_capacity,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_returns_default_when_missing() {
        let value: usize = parse_env("STAGELINK_TEST_MISSING_KEY", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn defaults_are_sane() {
        // Only checked when the variables are not set in the environment.
        if std::env::var("LISTEN_ADDR").is_err() {
            let Ok(config) = StagelinkConfig::from_env() else {
                panic!("default config should load");
            };
            assert_eq!(config.listen_addr.port(), 3001);
            assert_eq!(config.hub_queue_capacity, 1024);
        }
    }
}
