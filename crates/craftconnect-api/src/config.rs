//! Server configuration read from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use craftconnect_hearts::domain::config::GameConfig;

use crate::error::AppError;

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Viewport and timer settings for the hearts game.
    pub game: GameConfig,
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `VIEWPORT_WIDTH`, `VIEWPORT_HEIGHT`,
    /// `HEARTS_SPAWN_MS` and `HEARTS_TICK_MS`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Like [`AppConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = GameConfig::default();

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = parse_var(lookup, "PORT", 3000_u16)?;
        let viewport_width = positive(lookup, "VIEWPORT_WIDTH", defaults.viewport_width)?;
        let viewport_height = positive(lookup, "VIEWPORT_HEIGHT", defaults.viewport_height)?;
        let spawn_ms = positive(lookup, "HEARTS_SPAWN_MS", 1500_u32)?;
        let tick_ms = positive(lookup, "HEARTS_TICK_MS", 50_u32)?;

        Ok(Self {
            host,
            port,
            game: GameConfig {
                viewport_width,
                viewport_height,
                spawn_period: Duration::from_millis(u64::from(spawn_ms)),
                tick_period: Duration::from_millis(u64::from(tick_ms)),
                ..defaults
            },
        })
    }

    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a valid address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{name} must be a valid number: {e}"))),
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
) -> Result<u32, AppError> {
    match parse_var(lookup, name, default)? {
        0 => Err(AppError::Config(format!("{name} must be greater than zero"))),
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(&lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_overrides_viewport_and_periods() {
        let config = AppConfig::from_lookup(&lookup_from(&[
            ("PORT", "8080"),
            ("VIEWPORT_WIDTH", "320"),
            ("VIEWPORT_HEIGHT", "480"),
            ("HEARTS_SPAWN_MS", "1000"),
            ("HEARTS_TICK_MS", "16"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.game.viewport_width, 320);
        assert_eq!(config.game.viewport_height, 480);
        assert_eq!(config.game.spawn_period, Duration::from_millis(1000));
        assert_eq!(config.game.tick_period, Duration::from_millis(16));
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = AppConfig::from_lookup(&lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.starts_with("PORT")));
    }

    #[test]
    fn test_zero_tick_period_is_rejected() {
        let result = AppConfig::from_lookup(&lookup_from(&[("HEARTS_TICK_MS", "0")]));

        assert!(
            matches!(result, Err(AppError::Config(msg)) if msg == "HEARTS_TICK_MS must be greater than zero")
        );
    }

    #[test]
    fn test_bad_host_fails_bind_addr() {
        let config = AppConfig::from_lookup(&lookup_from(&[("HOST", "not a host")])).unwrap();

        assert!(config.bind_addr().is_err());
    }
}
