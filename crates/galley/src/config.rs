//! TOML-based configuration.
//!
//! Configuration sources in order of precedence (later overrides earlier):
//! 1. Bundled defaults (`galley.toml` shipped with the library)
//! 2. User config in home directory (`~/.config/galley/galley.toml`)
//! 3. User config in current directory (`./galley.toml`)

use config::{Config, File, FileFormat};
use galley_error::{ConfigError, GalleyResult};
use galley_pipeline::RunOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../galley.toml");

/// Batch dispatch settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Canonical entries per remote call
    pub chunk_size: usize,
    /// Pause between remote calls, in milliseconds
    pub pacing_ms: u64,
}

impl DispatchConfig {
    /// Convert to the pipeline's run options.
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new(self.chunk_size, Duration::from_millis(self.pacing_ms))
    }
}

/// Remote provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Model identifier passed to the driver
    pub model: String,
}

/// Top-level Galley configuration.
///
/// # Example
///
/// ```no_run
/// use galley::GalleyConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GalleyConfig::load()?;
/// let options = config.dispatch.run_options();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleyConfig {
    /// Batch dispatch settings
    pub dispatch: DispatchConfig,
    /// Remote provider settings
    pub provider: ProviderConfig,
}

impl GalleyConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GalleyResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// User config files are optional and silently skipped when absent. Also
    /// picks up a `.env` file when present, so `GEMINI_API_KEY` can live
    /// there.
    #[instrument]
    pub fn load() -> GalleyResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        dotenvy::dotenv().ok();

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/galley/galley.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("galley").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> GalleyConfig {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_bundled_defaults_parse() {
        let config = bundled();
        assert_eq!(config.dispatch.chunk_size, 20);
        assert_eq!(config.dispatch.pacing_ms, 1500);
        assert_eq!(config.provider.model, "gemini-2.0-flash-lite");
    }

    #[test]
    fn test_dispatch_converts_to_run_options() {
        let config = bundled();
        let options = config.dispatch.run_options();
        assert_eq!(options.chunk_size, 20);
        assert_eq!(options.pacing, Duration::from_millis(1500));
    }
}
