//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. All variables are optional and fall back to local-development
//! defaults.
//!
//! ## Variables
//!
//! - `BASE_URL` - Public base address used to build short URLs
//!   (default: `http://localhost:5000`)
//! - `ALLOWED_ORIGIN` - Frontend origin permitted by CORS
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address prepended to generated codes when building short URLs.
    pub base_url: String,
    /// Origin allowed to call the shorten and redirect routes cross-origin.
    pub allowed_origin: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        let allowed_origin =
            env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            base_url,
            allowed_origin,
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` or `allowed_origin` is not an http(s) address
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.allowed_origin.starts_with("http://")
            && !self.allowed_origin.starts_with("https://")
        {
            anyhow::bail!(
                "ALLOWED_ORIGIN must start with 'http://' or 'https://', got '{}'",
                self.allowed_origin
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Allowed origin: {}", self.allowed_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            base_url: "http://localhost:5000".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Test invalid base URL
        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://sho.rt".to_string();
        assert!(config.validate().is_ok());

        // Test invalid allowed origin
        config.allowed_origin = "ftp://frontend".to_string();
        assert!(config.validate().is_err());

        config.allowed_origin = "http://localhost:3000".to_string();

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("BASE_URL");
            env::remove_var("ALLOWED_ORIGIN");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("ALLOWED_ORIGIN", "https://app.sho.rt");
            env::set_var("LISTEN", "127.0.0.1:8080");
        }

        let config = Config::from_env();

        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.allowed_origin, "https://app.sho.rt");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");

        // Cleanup
        unsafe {
            env::remove_var("BASE_URL");
            env::remove_var("ALLOWED_ORIGIN");
            env::remove_var("LISTEN");
        }
    }
}
