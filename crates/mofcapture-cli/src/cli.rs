use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "mofcap - Simulate MOF water-vapor adsorption and rank sorbent candidates for atmospheric water capture sites.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank every material in a feature table for one deployment site.
    Rank(RankArgs),
    /// Simulate the adsorption isotherm of a single material.
    Simulate(SimulateArgs),
    /// Analyze the temperature-swing regeneration of a single material.
    Thermal(ThermalArgs),
}

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Path to the material feature table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub features: PathBuf,

    /// Deployment-site altitude in meters.
    #[arg(short, long, required = true, value_name = "METERS")]
    pub altitude: f64,

    /// Site relative humidity (0-1), recorded for forward compatibility.
    #[arg(long, value_name = "FLOAT")]
    pub humidity: Option<f64>,

    /// Site temperature in Kelvin, used for the top-candidate simulation.
    #[arg(long, value_name = "KELVIN")]
    pub temperature: Option<f64>,

    /// Path to a TOML file overriding the scoring weights.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the ranked table to this CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the dataset insights document to this JSON file.
    #[arg(long, value_name = "PATH")]
    pub insights: Option<PathBuf>,

    /// How many of the top-ranked materials to print.
    #[arg(long, value_name = "INT", default_value_t = 5)]
    pub top: usize,
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Path to the material feature table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub features: PathBuf,

    /// Identifier (Fips column) of the material to simulate.
    #[arg(short = 'i', long, required = true, value_name = "ID")]
    pub id: String,

    /// Lower end of the relative-humidity range.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.1)]
    pub humidity_min: f64,

    /// Upper end of the relative-humidity range.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.9)]
    pub humidity_max: f64,

    /// Number of humidity samples.
    #[arg(long, value_name = "INT", default_value_t = 50)]
    pub steps: usize,

    /// Simulation temperature in Kelvin.
    #[arg(short, long, value_name = "KELVIN", default_value_t = 298.0)]
    pub temperature: f64,

    /// Write the simulation result to this JSON file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `thermal` subcommand.
#[derive(Args, Debug)]
pub struct ThermalArgs {
    /// Path to the material feature table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub features: PathBuf,

    /// Identifier (Fips column) of the material to analyze.
    #[arg(short = 'i', long, required = true, value_name = "ID")]
    pub id: String,

    /// Ambient temperature in Kelvin.
    #[arg(long, value_name = "KELVIN", default_value_t = 298.0)]
    pub ambient: f64,

    /// Regeneration temperature in Kelvin. Optimized over a sweep when
    /// omitted.
    #[arg(short, long, value_name = "KELVIN")]
    pub regeneration: Option<f64>,

    /// Relative humidity during the adsorption half-cycle (0-1).
    #[arg(long, value_name = "FLOAT", default_value_t = 0.4)]
    pub humidity: f64,

    /// Write the swing analysis to this JSON file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
