//! # Isotherm Module
//!
//! Closed-form adsorption isotherm models and the derived performance
//! simulation.
//!
//! An isotherm maps ambient relative humidity (a stand-in for vapor partial
//! pressure) to the equilibrium adsorbed mass fraction at fixed temperature.
//! Three classical families are provided:
//!
//! - **Langmuir** - monolayer adsorption, saturates toward `q_max`
//! - **Freundlich** - empirical power law, no saturation plateau
//! - **Toth** - heterogeneous-surface generalization of Langmuir
//!
//! [`simulate::simulate_performance`] derives Langmuir parameters from coarse
//! material descriptors and produces an uptake curve plus a daily-yield
//! estimate. All functions are pure and deterministic.

pub mod models;
pub mod simulate;

pub use models::{IsothermError, freundlich, langmuir, langmuir_curve, toth};
pub use simulate::{IsothermModel, IsothermResult, humidity_range, simulate_performance};
