//! Configuration for Logo Forge
//!
//! Settings are read from an optional `logoforge.toml`. Every field has a
//! default, so a missing file yields a working configuration pointed at a
//! local generation endpoint.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::error::{ForgeError, ForgeResult};
use crate::traits::Validatable;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "logoforge.toml";

/// Fixed path of the generation endpoint
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/generate-logo";

/// Default server hosting the generation endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// ============================================================================
// Endpoint Config
// ============================================================================

/// Where and how to reach the generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Scheme, host and optional path prefix
    pub base_url: String,
    /// Endpoint path appended to `base_url`
    pub path: String,
    /// Request timeout; `None` leaves it to the transport
    pub timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_ENDPOINT_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl EndpointConfig {
    /// Parsed base URL
    pub fn base(&self) -> ForgeResult<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ForgeError::invalid_config(format!("base_url '{}': {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ForgeError::invalid_config(format!(
                "base_url '{}' must use http or https",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Full URL of the generation endpoint
    pub fn endpoint_url(&self) -> ForgeResult<Url> {
        self.base()?;
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), self.path);
        Url::parse(&joined)
            .map_err(|e| ForgeError::invalid_config(format!("endpoint '{}': {}", joined, e)))
    }

    /// Timeout as a duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Validatable for EndpointConfig {
    fn validate(&self) -> ForgeResult<()> {
        if !self.path.starts_with('/') {
            return Err(ForgeError::invalid_config(format!(
                "path '{}' must start with '/'",
                self.path
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ForgeError::invalid_config("timeout_secs must be greater than 0"));
        }
        self.endpoint_url().map(|_| ())
    }
}

// ============================================================================
// Window Config
// ============================================================================

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 860.0,
        }
    }
}

// ============================================================================
// Root Config
// ============================================================================

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub endpoint: EndpointConfig,
    pub window: WindowConfig,
}

impl ForgeConfig {
    /// Parse and validate config from TOML text
    pub fn from_toml_str(text: &str) -> ForgeResult<Self> {
        let config: ForgeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file that must exist
    pub fn load(path: &Path) -> ForgeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise defaults
    pub fn load_or_default(path: &Path) -> ForgeResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Replace the endpoint base URL (command line override)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> ForgeResult<Self> {
        self.endpoint.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }
}

impl Validatable for ForgeConfig {
    fn validate(&self) -> ForgeResult<()> {
        self.endpoint.validate()?;
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ForgeError::invalid_config("window size must be positive"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_point_at_local_endpoint() {
        let config = ForgeConfig::default();
        assert!(config.is_valid());
        assert_eq!(
            config.endpoint.endpoint_url().unwrap().as_str(),
            "http://localhost:3000/api/generate-logo"
        );
        assert_eq!(config.endpoint.timeout(), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ForgeConfig::from_toml_str(
            r#"
            [endpoint]
            base_url = "https://logos.example.com/"
            timeout_secs = 45
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint.path, DEFAULT_ENDPOINT_PATH);
        assert_eq!(config.endpoint.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(
            config.endpoint.endpoint_url().unwrap().as_str(),
            "https://logos.example.com/api/generate-logo"
        );
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_base_url_prefix_is_kept() {
        let endpoint = EndpointConfig {
            base_url: "https://example.com/studio".to_string(),
            ..Default::default()
        };
        assert_eq!(
            endpoint.endpoint_url().unwrap().as_str(),
            "https://example.com/studio/api/generate-logo"
        );
    }

    #[test]
    fn test_invalid_configs() {
        let bad_path = EndpointConfig {
            path: "api/generate-logo".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_path.validate(), Err(ForgeError::InvalidConfig(_))));

        let bad_scheme = EndpointConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(!bad_scheme.is_valid());

        let zero_timeout = EndpointConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(!zero_timeout.is_valid());

        assert!(ForgeConfig::from_toml_str("[window]\nwidth = -1.0\n").is_err());
    }

    #[test]
    fn test_unparseable_toml() {
        let result = ForgeConfig::from_toml_str("[endpoint\nbase_url = 1");
        assert!(matches!(result, Err(ForgeError::Toml(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ForgeConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ForgeConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[endpoint]\nbase_url = \"http://127.0.0.1:8080\"").unwrap();

        let config = ForgeConfig::load_or_default(&path).unwrap();
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_with_base_url_override() {
        let config = ForgeConfig::default()
            .with_base_url("http://10.0.0.5:3000")
            .unwrap();
        assert_eq!(
            config.endpoint.endpoint_url().unwrap().as_str(),
            "http://10.0.0.5:3000/api/generate-logo"
        );
        assert!(ForgeConfig::default().with_base_url("not a url").is_err());
    }
}
