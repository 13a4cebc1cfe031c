use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, Overrides};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

const MAX_PARTICLES: u32 = 64;
const MAX_FRAME_MS: u64 = 1000;

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/big-red-button/config.toml` on Unix, the platform
    /// equivalent elsewhere, or the current directory as a last resort.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("big-red-button").join("config.toml")
    }

    /// Loads the default config file, falling back to defaults if it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command line overrides and re-validates.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(tick_ms) = overrides.tick_ms {
            self.timing.tick_ms = tick_ms;
        }
        if let Some(count) = overrides.particle_count {
            self.animation.particle_count = count;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |message: String| -> Result<(), ConfigError> {
            Err(ConfigError::ValidationError { message })
        };

        if self.timing.tick_ms == 0 {
            return fail("timing.tick_ms must be greater than zero".to_string());
        }
        if self.timing.frame_ms == 0 || self.timing.frame_ms > MAX_FRAME_MS {
            return fail(format!(
                "timing.frame_ms must be between 1 and {}, got {}",
                MAX_FRAME_MS, self.timing.frame_ms
            ));
        }

        let animation = &self.animation;
        if animation.particle_count == 0 || animation.particle_count > MAX_PARTICLES {
            return fail(format!(
                "animation.particle_count must be between 1 and {}, got {}",
                MAX_PARTICLES, animation.particle_count
            ));
        }
        if animation.fade_in_ms >= animation.explosion_ms {
            return fail(format!(
                "animation.fade_in_ms ({}) must be shorter than animation.explosion_ms ({})",
                animation.fade_in_ms, animation.explosion_ms
            ));
        }
        if animation.explosion_scale.is_nan() || animation.explosion_scale <= 0.0 {
            return fail("animation.explosion_scale must be positive".to_string());
        }
        if animation.particle_radius.is_nan() || animation.particle_radius <= 0.0 {
            return fail("animation.particle_radius must be positive".to_string());
        }

        Ok(())
    }
}
