use thiserror::Error;

use crate::core::io::table::TableError;
use crate::core::models::material::MaterialError;
use crate::core::thermal::swing::ThermalError;
use crate::engine::config::ConfigError;
use crate::engine::optimizer::ScoringError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Feature table error: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error("Material validation failed: {source}")]
    Material {
        #[from]
        source: MaterialError,
    },

    #[error("Thermal swing error: {source}")]
    Thermal {
        #[from]
        source: ThermalError,
    },

    #[error("Scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Record '{0}' not found in the feature table")]
    RecordNotFound(String),
}
