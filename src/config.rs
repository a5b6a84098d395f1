use color_eyre::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Kitchen API address used when no config overrides it.
/// An IP literal, not `localhost`: the API only listens on IPv4.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    //* API base URL for the demo endpoints */
    pub base_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir
            .join(".config")
            .join("kitchen-demo-tui")
            .join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %config_path.display(), "loaded config");

        Ok(config)
    }

    /// Parse and validate config contents
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;

        if let Some(base_url) = &config.server.base_url {
            validate_url(base_url).map_err(|e| color_eyre::eyre::eyre!("server.base_url: {e}"))?;
        }

        Ok(config)
    }

    /// Base address the demo endpoints are resolved against
    pub fn base_url(&self) -> String {
        self.server
            .base_url
            .as_deref()
            .map(extract_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// Simple URL validation
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    url::Url::parse(url).map_err(|e| format!("Invalid URL: {e}"))?;

    Ok(())
}

/// Reduces a URL to scheme, host and port
/// Example: http://127.0.0.1:5000/demo/one -> http://127.0.0.1:5000
pub fn extract_base_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        let scheme = parsed.scheme();
        let host = parsed.host_str().unwrap_or("127.0.0.1");

        if let Some(port) = parsed.port() {
            format!("{scheme}://{host}:{port}")
        } else {
            format!("{scheme}://{host}")
        }
    } else {
        // Fallback: keep the input untouched if parsing fails
        url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_empty_file_uses_default() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.server.base_url.is_none());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::from_toml_str(
            r#"
            [server]
            base_url = "http://10.0.0.5:8080/"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://10.0.0.5:8080");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = Config::from_toml_str(
            r#"
            [server]
            base_url = "127.0.0.1:5000"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://127.0.0.1:5000").is_ok());
        assert!(validate_url("https://api.example.com").is_ok());
        assert_eq!(validate_url(""), Err("URL cannot be empty".to_string()));
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn test_extract_base_url_strips_path() {
        assert_eq!(
            extract_base_url("http://127.0.0.1:5000/demo/one"),
            "http://127.0.0.1:5000"
        );
        assert_eq!(
            extract_base_url("https://kitchen.example.com/api/"),
            "https://kitchen.example.com"
        );
    }
}
