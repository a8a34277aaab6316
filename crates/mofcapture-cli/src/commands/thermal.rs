use crate::cli::ThermalArgs;
use crate::error::{CliError, Result};
use mofcapture::core::io::table::load_material_table;
use mofcapture::core::thermal::swing::{
    OperatingConditions, SwingResult, ThermalProperties, optimize_regeneration_temp,
    simulate_temperature_swing,
};
use mofcapture::engine::error::EngineError;
use serde::Serialize;
use std::fs::File;
use tracing::info;

#[derive(Debug, Serialize)]
struct ThermalReport {
    fips: String,
    conditions: OperatingConditions,
    result: SwingResult,
}

pub fn run(args: ThermalArgs) -> Result<()> {
    if !(0.0..=1.0).contains(&args.humidity) {
        return Err(CliError::Argument(format!(
            "humidity must be within [0, 1], got {}",
            args.humidity
        )));
    }
    if !args.ambient.is_finite() || args.ambient <= 0.0 {
        return Err(CliError::Argument(format!(
            "ambient temperature must be positive, got {} K",
            args.ambient
        )));
    }

    let records = load_material_table(&args.features).map_err(EngineError::from)?;
    let record = records
        .iter()
        .find(|r| r.fips == args.id)
        .ok_or_else(|| EngineError::RecordNotFound(args.id.clone()))?;
    record.properties.validate().map_err(EngineError::from)?;

    let properties = ThermalProperties::for_material(&record.properties);
    let base = OperatingConditions {
        ambient_temp_k: args.ambient,
        regeneration_temp_k: args.regeneration.unwrap_or(args.ambient),
        humidity: args.humidity,
        ..OperatingConditions::default()
    };

    let conditions = match args.regeneration {
        Some(_) => base,
        None => {
            info!(fips = record.fips.as_str(), "Optimizing regeneration temperature.");
            optimize_regeneration_temp(&properties, &base).map_err(EngineError::from)?
        }
    };

    let result = simulate_temperature_swing(&properties, &conditions).map_err(EngineError::from)?;

    println!(
        "Material {}: regeneration at {:.0} K (ambient {:.0} K, RH {:.0}%)",
        record.fips,
        conditions.regeneration_temp_k,
        conditions.ambient_temp_k,
        conditions.humidity * 100.0,
    );
    println!(
        "Swing yield {:.3} kg/kg per cycle ({:.3} kg/kg/day), energy {:.0} kJ",
        result.water_yield_kg_per_kg,
        result.daily_yield_kg_per_kg(),
        result.energy_consumption_kj,
    );
    println!(
        "Thermal efficiency {:.3e}, degradation risk {:.1}",
        result.thermal_efficiency, result.risk_score,
    );

    if let Some(output) = &args.output {
        let report = ThermalReport {
            fips: record.fips.clone(),
            conditions,
            result,
        };
        let file = File::create(output)?;
        serde_json::to_writer_pretty(file, &report)
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to write report JSON: {e}")))?;
        println!("✓ Thermal report written to: {}", output.display());
    }

    Ok(())
}
