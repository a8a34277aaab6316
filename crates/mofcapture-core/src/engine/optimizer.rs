use crate::core::isotherm::simulate::CYCLES_PER_DAY;
use crate::core::models::material::{MaterialError, MaterialProperties, MaterialRecord};
use crate::core::models::site::{AltitudeBand, Location, SiteConditions};
use crate::engine::config::OptimizeConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use thiserror::Error;

/// Cost baseline against which the cost factor is normalized [$/kg].
const REFERENCE_COST_PER_KG: f64 = 50.0;

/// Surface area against which the capacity factor is normalized [m²/g].
const REFERENCE_SURFACE_AREA_M2G: f64 = 1000.0;

/// Bounds of the thermal-margin factor. The clip keeps a single very stable
/// (or very fragile) material from dominating the weighted sum.
const TEMP_FACTOR_MIN: f64 = 0.8;
const TEMP_FACTOR_MAX: f64 = 1.2;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Material '{fips}' rejected: {source}")]
    InvalidMaterial {
        fips: String,
        #[source]
        source: MaterialError,
    },

    #[error("Material '{fips}' has zero cost_per_kg; cost factor is undefined")]
    ZeroCost { fips: String },

    #[error("Material '{fips}' produced a non-finite performance score")]
    NonFiniteScore { fips: String },
}

/// The four normalized factors entering the performance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceFactors {
    pub humidity: f64,
    pub thermal: f64,
    pub capacity: f64,
    pub cost: f64,
}

impl PerformanceFactors {
    /// Computes the raw factors of one material against a band's reference
    /// conditions.
    ///
    /// - humidity: `hydrophilicity / humidity_avg` - rewards hydrophilic
    ///   materials more strongly at drier sites
    /// - thermal: `thermal_stability_K / temp_K`, clipped to `[0.8, 1.2]`
    /// - capacity: `(surface_area / 1000) * pore_volume`
    /// - cost: `1 / (cost_per_kg / 50)`
    ///
    /// Callers must guarantee `cost_per_kg != 0`; the scoring entry points
    /// enforce this before delegating here.
    pub fn compute(properties: &MaterialProperties, conditions: &SiteConditions) -> Self {
        Self {
            humidity: properties.hydrophilicity / conditions.humidity_avg,
            thermal: (properties.thermal_stability_k / conditions.temp_k)
                .clamp(TEMP_FACTOR_MIN, TEMP_FACTOR_MAX),
            capacity: (properties.surface_area_m2g / REFERENCE_SURFACE_AREA_M2G)
                * properties.pore_volume_cm3g,
            cost: 1.0 / (properties.cost_per_kg / REFERENCE_COST_PER_KG),
        }
    }

    pub fn weighted_score(&self, config: &OptimizeConfig) -> f64 {
        let w = &config.weights;
        w.humidity * self.humidity
            + w.thermal * self.thermal
            + w.capacity * self.capacity
            + w.cost * self.cost
    }
}

/// A feature-table row annotated with its score and site-specific yield
/// estimate.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMaterial {
    pub record: MaterialRecord,
    pub factors: PerformanceFactors,
    pub performance_score: f64,
    pub estimated_daily_yield_l_per_kg_day: f64,
}

fn score_record(
    record: &MaterialRecord,
    conditions: &SiteConditions,
    config: &OptimizeConfig,
) -> Result<RankedMaterial, ScoringError> {
    if record.properties.cost_per_kg == 0.0 {
        return Err(ScoringError::ZeroCost {
            fips: record.fips.clone(),
        });
    }
    record
        .properties
        .validate()
        .map_err(|source| ScoringError::InvalidMaterial {
            fips: record.fips.clone(),
            source,
        })?;

    let factors = PerformanceFactors::compute(&record.properties, conditions);
    let performance_score = factors.weighted_score(config);
    if !performance_score.is_finite() {
        return Err(ScoringError::NonFiniteScore {
            fips: record.fips.clone(),
        });
    }

    // Coarser closed-form estimate than the isotherm simulation: nominal
    // uptake at the band's average humidity, cycled over one day.
    let estimated_daily_yield_l_per_kg_day =
        record.properties.max_water_uptake * conditions.humidity_avg * CYCLES_PER_DAY;

    Ok(RankedMaterial {
        record: record.clone(),
        factors,
        performance_score,
        estimated_daily_yield_l_per_kg_day,
    })
}

/// Scores and ranks every material for one deployment site.
///
/// The site's altitude selects a fixed [`AltitudeBand`]; each row is scored
/// against that band's reference conditions and the result is sorted by
/// `performance_score` descending. The sort is stable, so rows with equal
/// scores keep their input order. The input collection is not mutated.
///
/// A malformed row fails the whole batch: the returned error names the
/// offending row's identifier, and no partial ranking is produced.
pub fn optimize_for_location(
    records: &[MaterialRecord],
    location: &Location,
    config: &OptimizeConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<RankedMaterial>, ScoringError> {
    let band = AltitudeBand::classify(location.altitude_m);
    let conditions = band.conditions();

    reporter.report(Progress::RowsStart {
        total: records.len() as u64,
    });

    let mut ranked = Vec::with_capacity(records.len());
    for record in records {
        match score_record(record, &conditions, config) {
            Ok(row) => {
                ranked.push(row);
                reporter.report(Progress::RowScored);
            }
            Err(error) => {
                // Close the row phase so observers do not hang on an
                // abandoned batch.
                reporter.report(Progress::RowsFinish);
                return Err(error);
            }
        }
    }
    reporter.report(Progress::RowsFinish);

    ranked.sort_by(|a, b| b.performance_score.total_cmp(&a.performance_score));
    Ok(ranked)
}
