//! # Thermal Module
//!
//! Temperature-swing regeneration analysis for MOF sorbents.
//!
//! Capturing adsorbed water requires heating the bed to a regeneration
//! temperature above ambient; this module models the energy cost of that
//! swing, the resulting thermal efficiency (water released per unit heating
//! energy), and a risk score for operating close to the material's thermal
//! stability limit. [`swing::optimize_regeneration_temp`] sweeps candidate
//! regeneration temperatures and picks the most efficient one that stays in
//! the safe band.
//!
//! Like the isotherm layer, everything here is a pure computation over plain
//! values.

pub mod swing;

pub use swing::{
    OperatingConditions, SwingResult, ThermalError, ThermalProperties, optimize_regeneration_temp,
    simulate_temperature_swing,
};
