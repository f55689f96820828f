//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line overrides.

use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default interface the web service binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default TCP port the web service listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the HTTP front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    /// TCP port to bind; `0` picks an ephemeral port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a JSON file. Missing fields take their defaults.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or is not a valid config object.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command-line overrides on top of the current values.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Resolves the configured host and port to a socket address.
    ///
    /// ## Errors
    /// Returns [`ConfigError::InvalidAddress`] if the host cannot be resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = || ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port));
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:5000".parse().unwrap()
        );
    }

    #[test]
    fn test_from_file_partial() {
        let file = write_config(r#"{ "port": 8080 }"#);
        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_from_file_rejects_unknown_fields() {
        let file = write_config(r#"{ "port": 8080, "swagger": true }"#);
        let err = ServerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = write_config(r#"{ "host": "0.0.0.0", "port": 8080 }"#);
        let config = ServerConfig::from_file(file.path())
            .unwrap()
            .with_overrides(None, Some(9090));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);

        let config = config.with_overrides(Some("::1".to_string()), None);
        assert_eq!(config.socket_addr().unwrap(), "[::1]:9090".parse().unwrap());
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::default().with_overrides(Some("not a host!".to_string()), None);
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
