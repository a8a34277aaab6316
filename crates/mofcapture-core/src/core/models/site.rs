use serde::{Deserialize, Serialize};

/// Reference atmospheric conditions for one altitude band.
///
/// The table is fixed process-wide configuration: it is consulted read-only by
/// the optimizer and never modified after startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteConditions {
    pub pressure_atm: f64,
    pub temp_k: f64,
    pub humidity_avg: f64,
}

/// Discretized altitude regime used to select reference conditions for
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeBand {
    SeaLevel,
    LowAltitude,
    MidAltitude,
    HighAltitude,
}

impl AltitudeBand {
    /// Classifies an altitude into a band.
    ///
    /// Thresholds are half-open on the upper side: 500 m is already
    /// `LowAltitude`, 3000 m is already `HighAltitude`.
    pub fn classify(altitude_m: f64) -> Self {
        if altitude_m < 500.0 {
            AltitudeBand::SeaLevel
        } else if altitude_m < 1500.0 {
            AltitudeBand::LowAltitude
        } else if altitude_m < 3000.0 {
            AltitudeBand::MidAltitude
        } else {
            AltitudeBand::HighAltitude
        }
    }

    /// Fixed reference conditions for this band.
    pub fn conditions(&self) -> SiteConditions {
        match self {
            AltitudeBand::SeaLevel => SiteConditions {
                pressure_atm: 1.0,
                temp_k: 298.0,
                humidity_avg: 0.6,
            },
            AltitudeBand::LowAltitude => SiteConditions {
                pressure_atm: 0.95,
                temp_k: 295.0,
                humidity_avg: 0.5,
            },
            AltitudeBand::MidAltitude => SiteConditions {
                pressure_atm: 0.85,
                temp_k: 288.0,
                humidity_avg: 0.4,
            },
            AltitudeBand::HighAltitude => SiteConditions {
                pressure_atm: 0.7,
                temp_k: 280.0,
                humidity_avg: 0.3,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AltitudeBand::SeaLevel => "sea_level",
            AltitudeBand::LowAltitude => "low_altitude",
            AltitudeBand::MidAltitude => "mid_altitude",
            AltitudeBand::HighAltitude => "high_altitude",
        }
    }
}

/// Deployment-site descriptor supplied by the caller.
///
/// Only `altitude_m` is consumed by the scoring logic; `humidity` and `temp_k`
/// are accepted for forward compatibility with site-specific overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub altitude_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_k: Option<f64>,
}

impl Location {
    pub fn at_altitude(altitude_m: f64) -> Self {
        Self {
            altitude_m,
            humidity: None,
            temp_k: None,
        }
    }
}
