//! Layered Run Configuration

use anyhow::Context;
use config::{Config, Environment, File};
use csv_pipeline::ValidationPolicy;
use data_validator::{RangeConfig, DEFAULT_PRECISION};
use serde::Deserialize;
use std::path::Path;

/// Converter settings from the optional config file and environment.
///
/// Command-line flags take precedence over anything loaded here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physical validation ranges
    pub ranges: RangeConfig,
    /// Decimal places in the emitted table
    pub precision: usize,
    /// Default validation policy
    pub policy: ValidationPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ranges: RangeConfig::default(),
            precision: DEFAULT_PRECISION,
            policy: ValidationPolicy::Abort,
        }
    }
}

/// Load settings from an optional TOML file plus `AGRISENSE_*` variables
pub fn load(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }
    let config = builder
        .add_source(
            Environment::with_prefix("AGRISENSE")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("failed to load configuration")?;
    config.try_deserialize().context("invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let settings = load(None).unwrap();
        assert_eq!(settings.precision, DEFAULT_PRECISION);
        assert_eq!(settings.policy, ValidationPolicy::Abort);
        assert_eq!(settings.ranges.humidity, (0.0, 100.0));
        assert_eq!(settings.ranges.ph, (0.0, 14.0));
        assert_eq!(settings.ranges.temperature, None);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "precision = 3\npolicy = \"skip\"\n\n[ranges]\ntemperature = [-10.0, 50.0]"
        )
        .unwrap();
        file.flush().unwrap();

        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.precision, 3);
        assert_eq!(settings.policy, ValidationPolicy::Skip);
        assert_eq!(settings.ranges.temperature, Some((-10.0, 50.0)));
        // untouched fields keep their defaults
        assert_eq!(settings.ranges.humidity, (0.0, 100.0));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/agrisense.toml"))).is_err());
    }
}
