use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::order::{DEFAULT_DELIVERY_FEE_PER_DAY, DEFAULT_MAX_DELIVERY_DAYS};

// ============================================================================
// Service Configuration
// ============================================================================
//
// Read once at startup from CATERING_* environment variables. Unset or
// unparsable numeric values fall back to their defaults; a malformed webhook
// URL is a startup error.
//
// ============================================================================

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_RELAY_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const MAX_DELIVERY_FEE_PER_DAY: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub webhook_url: Option<Url>,
    pub relay_timeout: Duration,
    pub delivery_fee_per_day: u64,
    pub max_delivery_days: usize,
    pub max_body_bytes: usize,
    pub menu_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            webhook_url: None,
            relay_timeout: Duration::from_millis(DEFAULT_RELAY_TIMEOUT_MS),
            delivery_fee_per_day: DEFAULT_DELIVERY_FEE_PER_DAY,
            max_delivery_days: DEFAULT_MAX_DELIVERY_DAYS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            menu_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let webhook_url = match env.string("CATERING_WEBHOOK_URL") {
            Some(raw) => {
                let url = Url::parse(&raw).with_context(|| format!("invalid CATERING_WEBHOOK_URL: {}", raw))?;
                if !matches!(url.scheme(), "http" | "https") {
                    bail!("CATERING_WEBHOOK_URL must be http or https, got {}", url.scheme());
                }
                Some(url)
            }
            None => None,
        };

        let max_delivery_days = env.parse("CATERING_MAX_DELIVERY_DAYS", DEFAULT_MAX_DELIVERY_DAYS);
        if max_delivery_days == 0 {
            bail!("CATERING_MAX_DELIVERY_DAYS must be at least 1");
        }

        let delivery_fee_per_day = env.parse("CATERING_DELIVERY_FEE_PER_DAY", DEFAULT_DELIVERY_FEE_PER_DAY);
        if delivery_fee_per_day > MAX_DELIVERY_FEE_PER_DAY {
            bail!(
                "CATERING_DELIVERY_FEE_PER_DAY must be at most {}, got {}",
                MAX_DELIVERY_FEE_PER_DAY,
                delivery_fee_per_day
            );
        }

        Ok(Self {
            bind_addr: env.string("CATERING_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            webhook_url,
            relay_timeout: Duration::from_millis(env.parse("CATERING_RELAY_TIMEOUT_MS", DEFAULT_RELAY_TIMEOUT_MS)),
            delivery_fee_per_day,
            max_delivery_days,
            max_body_bytes: env.parse("CATERING_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            menu_path: env.string("CATERING_MENU_PATH").map(PathBuf::from),
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T: std::str::FromStr>(&self, name: &str, default: T) -> T {
        match self.string(name) {
            Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
                tracing::warn!(variable = name, value = %raw, "Ignoring unparsable value, using default");
                default
            }),
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.webhook_url.is_none());
        assert_eq!(config.delivery_fee_per_day, 10);
        assert_eq!(config.max_delivery_days, 7);
        assert_eq!(config.relay_timeout, Duration::from_secs(10));
        assert!(config.menu_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CATERING_BIND_ADDR", "127.0.0.1:9000"),
            ("CATERING_WEBHOOK_URL", "https://hooks.example.com/orders"),
            ("CATERING_DELIVERY_FEE_PER_DAY", "15"),
            ("CATERING_MAX_DELIVERY_DAYS", "14"),
            ("CATERING_RELAY_TIMEOUT_MS", "2500"),
            ("CATERING_MENU_PATH", "/etc/catering/menu.json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.webhook_url.unwrap().host_str(), Some("hooks.example.com"));
        assert_eq!(config.delivery_fee_per_day, 15);
        assert_eq!(config.max_delivery_days, 14);
        assert_eq!(config.relay_timeout, Duration::from_millis(2500));
        assert_eq!(config.menu_path, Some(PathBuf::from("/etc/catering/menu.json")));
    }

    #[test]
    fn test_unparsable_number_falls_back() {
        let config = config_from(&[("CATERING_DELIVERY_FEE_PER_DAY", "ten")]).unwrap();
        assert_eq!(config.delivery_fee_per_day, 10);
    }

    #[test]
    fn test_blank_webhook_disables_relay() {
        let config = config_from(&[("CATERING_WEBHOOK_URL", "  ")]).unwrap();
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn test_invalid_webhook_url_is_error() {
        assert!(config_from(&[("CATERING_WEBHOOK_URL", "not a url")]).is_err());
        assert!(config_from(&[("CATERING_WEBHOOK_URL", "ftp://example.com/x")]).is_err());
    }

    #[test]
    fn test_zero_max_days_is_error() {
        assert!(config_from(&[("CATERING_MAX_DELIVERY_DAYS", "0")]).is_err());
    }

    #[test]
    fn test_oversized_delivery_fee_is_error() {
        assert!(config_from(&[("CATERING_DELIVERY_FEE_PER_DAY", "18446744073709551615")]).is_err());

        let config = config_from(&[("CATERING_DELIVERY_FEE_PER_DAY", "1000000")]).unwrap();
        assert_eq!(config.delivery_fee_per_day, MAX_DELIVERY_FEE_PER_DAY);
    }
}
