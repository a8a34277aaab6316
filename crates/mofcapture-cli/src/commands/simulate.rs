use crate::cli::SimulateArgs;
use crate::error::{CliError, Result};
use mofcapture::core::io::table::load_material_table;
use mofcapture::core::isotherm::simulate::{humidity_range, simulate_performance};
use mofcapture::engine::error::EngineError;
use std::fs::File;
use tracing::info;

pub fn run(args: SimulateArgs) -> Result<()> {
    if args.humidity_min < 0.0 || args.humidity_max > 1.0 || args.humidity_min > args.humidity_max {
        return Err(CliError::Argument(format!(
            "humidity range [{}, {}] must lie within [0, 1] with min <= max",
            args.humidity_min, args.humidity_max
        )));
    }
    if args.steps == 0 {
        return Err(CliError::Argument("steps must be at least 1".to_string()));
    }

    let records = load_material_table(&args.features).map_err(EngineError::from)?;
    let record = records
        .iter()
        .find(|r| r.fips == args.id)
        .ok_or_else(|| EngineError::RecordNotFound(args.id.clone()))?;
    record
        .properties
        .validate()
        .map_err(EngineError::from)?;

    info!(fips = record.fips.as_str(), "Simulating adsorption isotherm.");
    let humidity = humidity_range(args.humidity_min, args.humidity_max, args.steps);
    let result = simulate_performance(&record.properties, &humidity, args.temperature);

    println!(
        "Material {} ({} model): q_max = {:.4}, K = {:.4}",
        record.fips,
        result.model.as_str(),
        result.q_max,
        result.k,
    );
    println!(
        "Daily yield estimate: {:.3} L/kg/day over RH [{:.2}, {:.2}] at {:.0} K",
        result.daily_yield_l_per_kg_day, args.humidity_min, args.humidity_max, args.temperature,
    );

    if let Some(output) = &args.output {
        let file = File::create(output)?;
        serde_json::to_writer_pretty(file, &result)
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to write result JSON: {e}")))?;
        println!("✓ Simulation result written to: {}", output.display());
    }

    Ok(())
}
