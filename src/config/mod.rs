pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, Config, LoggingConfig, Overrides, TimingConfig};
