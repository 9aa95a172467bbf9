use anyhow::Result;
use std::path::Path;

use crate::config::ValidationResult;
use crate::Config;

/// Main application state and lifecycle manager
pub struct App {
    config: Config,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance, loading config from `path` when given
    /// and from the default location otherwise
    pub fn with_config_path(path: Option<&Path>) -> Result<Self> {
        let (config, validation) = Config::load_validated(path)?;
        tracing::debug!(
            "Configuration loaded from {} with {} warning(s)",
            config.config_dir.display(),
            validation.warnings.len()
        );

        Ok(Self::from_config(config, validation))
    }

    /// Wrap an already loaded configuration
    pub fn from_config(config: Config, validation: ValidationResult) -> Self {
        Self {
            config,
            validation,
        }
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Warnings collected while validating the configuration
    pub fn warnings(&self) -> &[crate::config::ConfigValidationError] {
        &self.validation.warnings
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::debug!("Shutting down application");
        Ok(())
    }
}
