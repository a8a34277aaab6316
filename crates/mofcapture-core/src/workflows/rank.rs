use crate::core::io::table::{TableError, load_material_table, write_ranked_table};
use crate::core::isotherm::simulate::{
    DEFAULT_TEMPERATURE_K, IsothermResult, humidity_range, simulate_performance,
};
use crate::core::models::site::{AltitudeBand, Location, SiteConditions};
use crate::engine::config::OptimizeConfig;
use crate::engine::error::EngineError;
use crate::engine::optimizer::{RankedMaterial, optimize_for_location};
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

const SIMULATION_HUMIDITY_MIN: f64 = 0.1;
const SIMULATION_HUMIDITY_MAX: f64 = 0.9;
const SIMULATION_STEPS: usize = 50;

/// Complete output of the rank-for-site workflow.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub altitude_band: AltitudeBand,
    pub conditions: SiteConditions,
    pub ranked: Vec<RankedMaterial>,
    /// Isotherm simulation of the top-ranked material, absent only for an
    /// empty table (which the loader already rejects).
    pub top_simulation: Option<IsothermResult>,
}

/// One flat row of the ranked export table: the input columns with the two
/// computed columns appended.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    #[serde(rename = "Fips")]
    pub fips: String,
    pub surface_area_m2g: f64,
    pub pore_volume_cm3g: f64,
    pub hydrophilicity: f64,
    pub max_water_uptake: f64,
    #[serde(rename = "thermal_stability_K")]
    pub thermal_stability_k: f64,
    pub cost_per_kg: f64,
    pub daily_water_yield: Option<f64>,
    pub performance_score: f64,
    pub estimated_daily_yield: f64,
}

impl From<&RankedMaterial> for RankedRow {
    fn from(ranked: &RankedMaterial) -> Self {
        let p = &ranked.record.properties;
        Self {
            fips: ranked.record.fips.clone(),
            surface_area_m2g: p.surface_area_m2g,
            pore_volume_cm3g: p.pore_volume_cm3g,
            hydrophilicity: p.hydrophilicity,
            max_water_uptake: p.max_water_uptake,
            thermal_stability_k: p.thermal_stability_k,
            cost_per_kg: p.cost_per_kg,
            daily_water_yield: ranked.record.daily_water_yield,
            performance_score: ranked.performance_score,
            estimated_daily_yield: ranked.estimated_daily_yield_l_per_kg_day,
        }
    }
}

/// Loads a feature table and ranks every material for one site.
///
/// The top-ranked material is additionally run through the isotherm
/// simulation over the standard humidity range, using the site's temperature
/// override when supplied.
#[instrument(skip_all, name = "rank_workflow")]
pub fn run(
    features_path: &Path,
    location: &Location,
    config: &OptimizeConfig,
    reporter: &ProgressReporter,
) -> Result<RankReport, EngineError> {
    reporter.report(Progress::StageStart {
        name: "Loading feature table",
    });
    let records = load_material_table(features_path)?;
    info!(rows = records.len(), "Feature table loaded.");
    reporter.report(Progress::StageFinish);

    let altitude_band = AltitudeBand::classify(location.altitude_m);
    let conditions = altitude_band.conditions();
    info!(
        altitude_m = location.altitude_m,
        band = altitude_band.as_str(),
        "Site classified."
    );

    reporter.report(Progress::StageStart {
        name: "Scoring materials",
    });
    let ranked = optimize_for_location(&records, location, config, reporter)?;
    reporter.report(Progress::StageFinish);

    let top_simulation = ranked.first().map(|top| {
        let humidity = humidity_range(
            SIMULATION_HUMIDITY_MIN,
            SIMULATION_HUMIDITY_MAX,
            SIMULATION_STEPS,
        );
        let temperature_k = location.temp_k.unwrap_or(DEFAULT_TEMPERATURE_K);
        let simulation = simulate_performance(&top.record.properties, &humidity, temperature_k);
        info!(
            fips = top.record.fips.as_str(),
            score = top.performance_score,
            daily_yield = simulation.daily_yield_l_per_kg_day,
            "Top candidate simulated."
        );
        simulation
    });

    Ok(RankReport {
        altitude_band,
        conditions,
        ranked,
        top_simulation,
    })
}

/// Writes the ranked table of a report to a CSV file in the export shape
/// consumed by the downstream ML pipeline.
pub fn export_ranked_csv(report: &RankReport, path: &Path) -> Result<(), TableError> {
    let rows: Vec<RankedRow> = report.ranked.iter().map(RankedRow::from).collect();
    write_ranked_table(path, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn write_features(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("features.csv");
        fs::write(
            &path,
            "Fips,surface_area_m2g,pore_volume_cm3g,hydrophilicity,max_water_uptake,thermal_stability_K,cost_per_kg,daily_water_yield\n\
             6001,1000.0,0.5,0.5,0.3,600.0,50.0,1.0\n\
             6003,2000.0,0.9,0.8,0.4,650.0,25.0,1.8\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn workflow_ranks_and_simulates_the_top_candidate() {
        let dir = tempdir().unwrap();
        let path = write_features(dir.path());

        let report = run(
            &path,
            &Location::at_altitude(1200.0),
            &OptimizeConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.altitude_band, AltitudeBand::LowAltitude);
        assert_eq!(report.conditions.humidity_avg, 0.5);
        assert_eq!(report.ranked.len(), 2);
        // 6003 dominates on every factor.
        assert_eq!(report.ranked[0].record.fips, "6003");

        let simulation = report.top_simulation.as_ref().unwrap();
        assert_eq!(simulation.humidity.len(), 50);
        assert!(simulation.daily_yield_l_per_kg_day > 0.0);
        assert_eq!(simulation.temperature_k, DEFAULT_TEMPERATURE_K);
    }

    #[test]
    fn site_temperature_override_reaches_the_simulation() {
        let dir = tempdir().unwrap();
        let path = write_features(dir.path());

        let location = Location {
            altitude_m: 1200.0,
            humidity: Some(0.4),
            temp_k: Some(290.0),
        };
        let report = run(
            &path,
            &location,
            &OptimizeConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.top_simulation.unwrap().temperature_k, 290.0);
    }

    #[test]
    fn reference_row_scores_the_expected_value() {
        let dir = tempdir().unwrap();
        let path = write_features(dir.path());

        let report = run(
            &path,
            &Location::at_altitude(1200.0),
            &OptimizeConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let reference = report
            .ranked
            .iter()
            .find(|r| r.record.fips == "6001")
            .unwrap();
        assert!(f64_approx_equal(reference.performance_score, 0.925));
    }

    #[test]
    fn missing_table_surfaces_a_table_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let result = run(
            &path,
            &Location::at_altitude(0.0),
            &OptimizeConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(EngineError::Table { .. })));
    }

    #[test]
    fn exported_csv_appends_the_computed_columns() {
        let dir = tempdir().unwrap();
        let path = write_features(dir.path());

        let report = run(
            &path,
            &Location::at_altitude(1200.0),
            &OptimizeConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let out = dir.path().join("ranked.csv");
        export_ranked_csv(&report, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let header = content.lines().next().unwrap();
        assert!(header.starts_with("Fips,surface_area_m2g"));
        assert!(header.ends_with("performance_score,estimated_daily_yield"));
        assert_eq!(content.lines().count(), 3);
        // First data row is the top-ranked material.
        assert!(content.lines().nth(1).unwrap().starts_with("6003,"));
    }
}
