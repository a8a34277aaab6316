use crate::error::{CliError, Result};
use mofcapture::engine::config::{OptimizeConfig, ScoringConfigBuilder};
use mofcapture::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;

/// On-disk configuration file. Every field is optional; anything not set
/// falls back to the library defaults.
///
/// ```toml
/// [weights]
/// humidity = 0.4
/// thermal = 0.2
/// capacity = 0.2
/// cost = 0.2
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub weights: WeightsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsSection {
    pub humidity: Option<f64>,
    pub thermal: Option<f64>,
    pub capacity: Option<f64>,
    pub cost: Option<f64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn into_optimize_config(self) -> Result<OptimizeConfig> {
        let mut builder = ScoringConfigBuilder::new();
        if let Some(weight) = self.weights.humidity {
            builder = builder.humidity_weight(weight);
        }
        if let Some(weight) = self.weights.thermal {
            builder = builder.thermal_weight(weight);
        }
        if let Some(weight) = self.weights.capacity {
            builder = builder.capacity_weight(weight);
        }
        if let Some(weight) = self.weights.cost {
            builder = builder.cost_weight(weight);
        }
        Ok(builder.build().map_err(EngineError::from)?)
    }
}

/// Resolves the effective scoring configuration: the file at `path` when
/// given, library defaults otherwise.
pub fn resolve(path: Option<&Path>) -> Result<OptimizeConfig> {
    match path {
        Some(path) => FileConfig::from_file(path)?.into_optimize_config(),
        None => Ok(OptimizeConfig::default()),
    }
}
