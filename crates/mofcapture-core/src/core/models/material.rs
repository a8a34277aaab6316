use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MaterialError {
    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Field '{field}' must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Field '{field}' must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Structural and economic descriptors of one MOF sample.
///
/// Hydrophilicity is a dimensionless affinity descriptor expected in `[0, 1]`;
/// values above 1 are accepted (the range expectation is not a hard bound).
/// `max_water_uptake` is a fractional mass uptake (kg water per kg sorbent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub surface_area_m2g: f64,
    pub pore_volume_cm3g: f64,
    pub hydrophilicity: f64,
    pub max_water_uptake: f64,
    #[serde(rename = "thermal_stability_K")]
    pub thermal_stability_k: f64,
    pub cost_per_kg: f64,
}

impl MaterialProperties {
    /// Checks the hard physical bounds required before scoring.
    ///
    /// Surface area, pore volume, max uptake, thermal stability, and cost must
    /// be finite and strictly positive (cost appears in a denominator of the
    /// scoring formula). Hydrophilicity must be finite and non-negative.
    pub fn validate(&self) -> Result<(), MaterialError> {
        let positive_fields = [
            ("surface_area_m2g", self.surface_area_m2g),
            ("pore_volume_cm3g", self.pore_volume_cm3g),
            ("max_water_uptake", self.max_water_uptake),
            ("thermal_stability_K", self.thermal_stability_k),
            ("cost_per_kg", self.cost_per_kg),
        ];
        for (field, value) in positive_fields {
            if !value.is_finite() {
                return Err(MaterialError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(MaterialError::NonPositive { field, value });
            }
        }

        if !self.hydrophilicity.is_finite() {
            return Err(MaterialError::NonFinite {
                field: "hydrophilicity",
                value: self.hydrophilicity,
            });
        }
        if self.hydrophilicity < 0.0 {
            return Err(MaterialError::Negative {
                field: "hydrophilicity",
                value: self.hydrophilicity,
            });
        }
        Ok(())
    }
}

/// One row of the material feature table: a [`MaterialProperties`] keyed by an
/// opaque sample identifier.
///
/// `daily_water_yield` is an optional measured column carried through from the
/// source dataset; it is used only by the insights report, never by the
/// optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(rename = "Fips")]
    pub fips: String,
    #[serde(flatten)]
    pub properties: MaterialProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_water_yield: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_material() -> MaterialProperties {
        MaterialProperties {
            surface_area_m2g: 1200.0,
            pore_volume_cm3g: 0.6,
            hydrophilicity: 0.7,
            max_water_uptake: 0.35,
            thermal_stability_k: 620.0,
            cost_per_kg: 42.0,
        }
    }

    #[test]
    fn valid_material_passes_validation() {
        assert!(valid_material().validate().is_ok());
    }

    #[test]
    fn zero_hydrophilicity_is_valid() {
        let mut material = valid_material();
        material.hydrophilicity = 0.0;
        assert!(material.validate().is_ok());
    }

    #[test]
    fn negative_surface_area_is_rejected() {
        let mut material = valid_material();
        material.surface_area_m2g = -1.0;
        assert!(matches!(
            material.validate(),
            Err(MaterialError::NonPositive {
                field: "surface_area_m2g",
                ..
            })
        ));
    }

    #[test]
    fn zero_cost_is_rejected() {
        let mut material = valid_material();
        material.cost_per_kg = 0.0;
        assert!(matches!(
            material.validate(),
            Err(MaterialError::NonPositive {
                field: "cost_per_kg",
                ..
            })
        ));
    }

    #[test]
    fn nan_pore_volume_is_rejected() {
        let mut material = valid_material();
        material.pore_volume_cm3g = f64::NAN;
        assert!(matches!(
            material.validate(),
            Err(MaterialError::NonFinite {
                field: "pore_volume_cm3g",
                ..
            })
        ));
    }

    #[test]
    fn negative_hydrophilicity_is_rejected() {
        let mut material = valid_material();
        material.hydrophilicity = -0.1;
        assert!(matches!(
            material.validate(),
            Err(MaterialError::Negative {
                field: "hydrophilicity",
                ..
            })
        ));
    }

    #[test]
    fn record_roundtrips_source_column_names_through_serde() {
        let record = MaterialRecord {
            fips: "6001".to_string(),
            properties: valid_material(),
            daily_water_yield: Some(1.2),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Fips\":\"6001\""));
        assert!(json.contains("\"thermal_stability_K\":620.0"));

        let back: MaterialRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
