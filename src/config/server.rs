/// HTTP server configuration.
///
/// Defaults can be overridden with `SITE_HOST`, `SITE_PORT` and `SITE_PARTIALS_DIR`.
use std::env;
use std::path::PathBuf;

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Directory holding HTML fragments such as the contact popup.
pub const DEFAULT_PARTIALS_DIR: &str = "partials";

pub const CONTACT_POPUP_FILE: &str = "contact-popup.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub partials_dir: PathBuf,
}

impl ServerConfig {
    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = match lookup("SITE_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("[Config] Ignoring invalid SITE_PORT={}", raw);
                defaults.port
            }),
            None => defaults.port,
        };
        Self {
            host: lookup("SITE_HOST").unwrap_or(defaults.host),
            port,
            partials_dir: lookup("SITE_PARTIALS_DIR").map(PathBuf::from).unwrap_or(defaults.partials_dir),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            partials_dir: PathBuf::from(DEFAULT_PARTIALS_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_env_empty() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_overrides_and_bad_port() {
        let vars: HashMap<&str, &str> = [
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", "not-a-port"),
            ("SITE_PARTIALS_DIR", "/srv/partials"),
        ]
        .into_iter()
        .collect();
        let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.partials_dir, PathBuf::from("/srv/partials"));
    }
}
