use crate::cli::RankArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use mofcapture::core::models::site::Location;
use mofcapture::engine::progress::ProgressReporter;
use mofcapture::workflows::insights::generate_insights;
use mofcapture::workflows::rank;
use std::fs::File;
use tracing::info;

pub fn run(args: RankArgs) -> Result<()> {
    if !args.altitude.is_finite() {
        return Err(CliError::Argument(format!(
            "altitude must be a finite number, got {}",
            args.altitude
        )));
    }
    if let Some(humidity) = args.humidity
        && !(0.0..=1.0).contains(&humidity)
    {
        return Err(CliError::Argument(format!(
            "humidity must be within [0, 1], got {humidity}"
        )));
    }

    let optimize_config = config::resolve(args.config.as_deref())?;
    let location = Location {
        altitude_m: args.altitude,
        humidity: args.humidity,
        temp_k: args.temperature,
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the rank workflow...");
    let report = rank::run(&args.features, &location, &optimize_config, &reporter)?;

    let conditions = report.conditions;
    println!(
        "\nSite: {:.0} m → {} (T = {:.0} K, avg RH = {:.0}%, P = {:.2} atm)",
        args.altitude,
        report.altitude_band.as_str(),
        conditions.temp_k,
        conditions.humidity_avg * 100.0,
        conditions.pressure_atm,
    );

    println!(
        "\nTop {} of {} materials:",
        args.top.min(report.ranked.len()),
        report.ranked.len()
    );
    for (i, row) in report.ranked.iter().take(args.top).enumerate() {
        println!(
            "{:>3}. {:<12} score {:.3}  est. yield {:.2} L/kg/day",
            i + 1,
            row.record.fips,
            row.performance_score,
            row.estimated_daily_yield_l_per_kg_day,
        );
    }

    if let Some(simulation) = &report.top_simulation {
        println!(
            "\nTop candidate isotherm ({}): q_max = {:.3}, K = {:.3}, yield {:.2} L/kg/day",
            simulation.model.as_str(),
            simulation.q_max,
            simulation.k,
            simulation.daily_yield_l_per_kg_day,
        );
    }

    if let Some(output) = &args.output {
        rank::export_ranked_csv(&report, output)
            .map_err(mofcapture::engine::error::EngineError::from)?;
        println!("✓ Ranked table written to: {}", output.display());
    }

    if let Some(insights_path) = &args.insights {
        let records: Vec<_> = report.ranked.iter().map(|r| r.record.clone()).collect();
        let insights = generate_insights(&records);
        let file = File::create(insights_path)?;
        serde_json::to_writer_pretty(file, &insights)
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to write insights JSON: {e}")))?;
        println!("✓ Insights document written to: {}", insights_path.display());
    }

    Ok(())
}
