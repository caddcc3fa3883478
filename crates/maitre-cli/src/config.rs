//! Client configuration.
//!
//! Configuration is read from an optional `maitre.toml` in the working
//! directory; a missing file yields the defaults. No flags, no
//! environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the demo client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ClientConfig {
    /// Streamable-HTTP endpoint of the booking server.
    pub server_url: String,
    /// Name used for logging and elicitation labeling.
    pub server_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000/mcp".to_string(),
            server_name: "booking".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "http://localhost:8000/mcp");
        assert_eq!(config.server_name, "booking");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("maitre.toml")).unwrap();
        assert_eq!(config.server_url, "http://localhost:8000/mcp");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maitre.toml");
        std::fs::write(&path, r#"server_url = "http://localhost:9000/mcp""#).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.server_url, "http://localhost:9000/mcp");
        assert_eq!(config.server_name, "booking");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maitre.toml");
        std::fs::write(&path, "server_url = [not toml").unwrap();

        assert!(ClientConfig::load(&path).is_err());
    }
}
