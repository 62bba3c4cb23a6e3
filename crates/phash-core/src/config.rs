use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::ResizeFilter;
use crate::hash::{Algorithm, DEFAULT_THRESHOLD};
use crate::processing::{Direction, Hasher};

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for hashing and comparing images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hashing algorithm
    pub algorithm: Algorithm,

    /// Grid edge length (algorithm default when absent)
    pub size: Option<u32>,

    /// Comparison direction, only used by the difference hash
    pub direction: Direction,

    /// Minimum similarity (0.0-1.0) for two images to count as similar
    pub threshold: f64,

    /// Filter used when resampling images to the hash grid
    pub resize_filter: ResizeFilter,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Perceptual,
            size: None,
            direction: Direction::Horizontal,
            threshold: DEFAULT_THRESHOLD,
            resize_filter: ResizeFilter::Triangle,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::Configuration(
                "Similarity threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        self.hasher().map(|_| ())
    }

    /// The validated hasher this configuration describes
    pub fn hasher(&self) -> Result<Hasher> {
        Hasher::new(self.algorithm, self.size, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hasher().unwrap(), Hasher::Perceptual { size: 32 });
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("phash.json");

        let config = Config {
            algorithm: Algorithm::Difference,
            size: Some(6),
            direction: Direction::Both,
            threshold: 0.85,
            resize_filter: ResizeFilter::Lanczos3,
            log_level: LogLevel::Debug,
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.hasher().unwrap(),
            Hasher::Difference {
                size: 6,
                direction: Direction::Both
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "algorithm": "wavelet", "threshold": 0.8 }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.algorithm, Algorithm::Wavelet);
        assert_eq!(config.threshold, 0.8);
        assert_eq!(config.resize_filter, ResizeFilter::Triangle);
        assert_eq!(config.hasher().unwrap(), Hasher::Wavelet { size: 8 });
    }

    #[test]
    fn test_invalid_configurations() {
        let config = Config {
            threshold: 1.5,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = Config {
            algorithm: Algorithm::Average,
            size: Some(9),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Size { .. })));
    }

    #[test]
    fn test_missing_or_malformed_file() {
        let temp_dir = tempdir().unwrap();
        assert!(Config::from_file(&temp_dir.path().join("missing.json")).is_err());

        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "algorithm": "blockhash" }"#).unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(Error::Configuration(_))
        ));
    }
}
