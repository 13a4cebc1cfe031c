use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Length of one countdown step in milliseconds (default: 1000).
    pub tick_ms: u64,
    /// Redraw interval in milliseconds (default: 33).
    pub frame_ms: u64,
}

impl TimingConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            frame_ms: 33,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of each leg of the press squeeze.
    pub press_leg_ms: u64,
    /// Total duration of the explosion.
    pub explosion_ms: u64,
    /// Fade-in part of the explosion; the rest is fade-out.
    pub fade_in_ms: u64,
    /// Final scale of the central flash.
    pub explosion_scale: f64,
    pub particle_count: u32,
    /// Distance particles travel from the center, in canvas units.
    pub particle_radius: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            press_leg_ms: 100,
            explosion_ms: 1000,
            fade_in_ms: 200,
            explosion_scale: 3.0,
            particle_count: 8,
            particle_radius: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `BIG_RED_BUTTON_LOG` is unset.
    pub level: String,
    /// Log file. Logging is discarded when unset, since the UI owns the terminal.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Values taken from the command line that win over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub tick_ms: Option<u64>,
    pub particle_count: Option<u32>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}
