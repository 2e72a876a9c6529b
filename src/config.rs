use anyhow::{Context, Result};

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Host process configuration loaded from environment variables.
/// The dispatch workflow reads none of these.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let http_host = lookup("PURGER_HTTP_HOST").unwrap_or(defaults.http_host);
        let http_port = match lookup("PURGER_HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PURGER_HTTP_PORT is not a valid port: {raw:?}"))?,
            None => defaults.http_port,
        };

        let config = Self {
            http_host,
            http_port,
        };

        tracing::info!(
            http_host = %config.http_host,
            http_port = config.http_port,
            "Loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_from_env() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PURGER_HTTP_HOST", "127.0.0.1"),
            ("PURGER_HTTP_PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(config.http_host, "127.0.0.1");
        assert_eq!(config.http_port, 9000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PURGER_HTTP_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PURGER_HTTP_PORT"));
    }
}
