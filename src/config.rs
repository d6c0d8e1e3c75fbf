use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::analysis::AnalyzerConfig;

/// Application-level settings, layered from an optional TOML file and
/// CROPSIGHT_* environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub analyzer: AnalyzerConfig,
    pub pretty_output: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            pretty_output: false,
        }
    }
}

impl Configuration {
    /// Load settings, falling back to defaults for anything unset.
    ///
    /// Lookup order: `cropsight.toml` next to the working directory (or the
    /// explicit path), then environment overrides such as
    /// `CROPSIGHT_ANALYZER__MAX_DIMENSION=512`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("cropsight").required(false)),
        };

        builder
            .add_source(Environment::with_prefix("CROPSIGHT").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_has_valid_analyzer() {
        let configuration = Configuration::default();
        assert!(configuration.analyzer.validate().is_ok());
        assert!(!configuration.pretty_output);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let configuration = Configuration::load(None).unwrap();
        assert_eq!(
            configuration.analyzer.max_dimension,
            AnalyzerConfig::default().max_dimension
        );
    }
}
