use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::info;
use trundle_geometry::Vector2;
use trundle_motion::MotionConfig;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Process settings loaded from the TOML configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Motion controller parameters.
    pub motion: MotionConfig,
    /// Initial energy tank level.
    pub energy: f64,
    /// Demo mission waypoints, in path order.
    pub waypoints: Vec<Vector2>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            motion: MotionConfig::default(),
            energy: 1000.0,
            waypoints: Vec::new(),
        }
    }
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    info!("loading configuration from {}", DEFAULT_CONFIG_PATH);
    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build()?;
    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.energy, 1000.0);
        assert_eq!(settings.motion, MotionConfig::default());
        assert!(settings.waypoints.is_empty());
    }
}
