use anyhow::{ensure, Context, Result};

/// Longest avatar handle lifetime accepted from the environment: one week.
const MAX_AVATAR_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Largest mock delay multiplier accepted from the environment.
const MAX_LATENCY_SCALE: f64 = 1000.0;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Multiplier on every mock delay. 0 disables the delays.
    pub latency_scale: f64,
    /// How long an uploaded avatar's session handle stays valid.
    pub avatar_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let latency_scale = lookup("MOCK_LATENCY_SCALE")
            .unwrap_or_else(|| "1.0".to_string())
            .parse::<f64>()
            .context("MOCK_LATENCY_SCALE must be a number")?;
        ensure!(
            (0.0..=MAX_LATENCY_SCALE).contains(&latency_scale),
            "MOCK_LATENCY_SCALE must be between 0 and {MAX_LATENCY_SCALE}, got {latency_scale}"
        );

        let avatar_ttl_secs = lookup("AVATAR_TTL_SECS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<i64>()
            .context("AVATAR_TTL_SECS must be a whole number of seconds")?;
        ensure!(
            (1..=MAX_AVATAR_TTL_SECS).contains(&avatar_ttl_secs),
            "AVATAR_TTL_SECS must be between 1 and {MAX_AVATAR_TTL_SECS}"
        );

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            latency_scale,
            avatar_ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.latency_scale, 1.0);
        assert_eq!(config.avatar_ttl_secs, 3600);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("MOCK_LATENCY_SCALE", "0"),
            ("AVATAR_TTL_SECS", "60"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.latency_scale, 0.0);
        assert_eq!(config.avatar_ttl_secs, 60);
    }

    #[test]
    fn test_rejects_bad_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_rejects_negative_latency_scale() {
        assert!(config_from(&[("MOCK_LATENCY_SCALE", "-0.5")]).is_err());
        assert!(config_from(&[("MOCK_LATENCY_SCALE", "fast")]).is_err());
    }

    #[test]
    fn test_rejects_huge_latency_scale() {
        for scale in ["1e20", "1000.5", "inf", "NaN"] {
            let err = config_from(&[("MOCK_LATENCY_SCALE", scale)]).unwrap_err();
            assert!(err.to_string().contains("MOCK_LATENCY_SCALE"), "{scale}: {err}");
        }
        let config = config_from(&[("MOCK_LATENCY_SCALE", "1000")]).unwrap();
        assert_eq!(config.latency_scale, MAX_LATENCY_SCALE);
    }

    #[test]
    fn test_rejects_out_of_range_avatar_ttl() {
        assert!(config_from(&[("AVATAR_TTL_SECS", "0")]).is_err());
        assert!(config_from(&[("AVATAR_TTL_SECS", "99999999")]).is_err());
    }
}
