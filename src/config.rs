//! Configuration management
//!
//! Handles loading, validation, and merging of configuration from:
//! - TOML files
//! - CLI arguments (applied as overrides by the binary)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Strategy;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input file (raw RGB stream)
    pub input: PathBuf,
    /// Output file (raw RGB stream)
    pub output: PathBuf,
    /// Numeric strategy for the conversion matrices
    #[serde(default)]
    pub strategy: Strategy,
    /// Dimensions of the raw input stream
    pub dimensions: RawDimensions,
}

/// Dimensions of a headerless raw stream
///
/// Raw files carry no metadata, so width and height must be configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawDimensions {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Override config fields from CLI arguments
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        strategy: Option<Strategy>,
    ) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        self
    }

    /// Validate configuration
    ///
    /// Dimension errors surface here with config context; the pipeline
    /// revalidates at entry regardless.
    pub fn validate(&self) -> Result<()> {
        let RawDimensions { width, height } = self.dimensions;
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            anyhow::bail!(
                "Invalid dimensions {}x{}: 4:2:0 subsampling requires positive even width and height",
                width,
                height
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
input = "dog100.raw"
output = "dog100_new.raw"
strategy = "float32"

[dimensions]
width = 100
height = 100
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.strategy, Strategy::Float32);
        assert_eq!(config.dimensions.width, 100);
        assert_eq!(config.input, PathBuf::from("dog100.raw"));
    }

    #[test]
    fn test_strategy_defaults_to_fixed_point() {
        let config: Config = toml::from_str(
            r#"
input = "in.raw"
output = "out.raw"

[dimensions]
width = 2
height = 2
"#,
        )
        .unwrap();
        assert_eq!(config.strategy, Strategy::FixedPoint);
    }

    #[test]
    fn test_validate_rejects_odd_dimensions() {
        let config: Config = toml::from_str(
            r#"
input = "in.raw"
output = "out.raw"

[dimensions]
width = 101
height = 100
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config: Config = toml::from_str(
            r#"
input = "in.raw"
output = "out.raw"

[dimensions]
width = 2
height = 2
"#,
        )
        .unwrap();

        let config = config.with_overrides(
            Some(PathBuf::from("other.raw")),
            None,
            Some(Strategy::Float64),
        );
        assert_eq!(config.input, PathBuf::from("other.raw"));
        assert_eq!(config.output, PathBuf::from("out.raw"));
        assert_eq!(config.strategy, Strategy::Float64);
    }
}
