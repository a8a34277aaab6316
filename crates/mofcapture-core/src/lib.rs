//! # MOF Capture Core Library
//!
//! A library for modeling water-vapor adsorption in Metal-Organic Framework (MOF)
//! sorbents and ranking candidate materials for atmospheric water capture at a
//! deployment site (e.g., a datacenter at a given altitude).
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`MaterialProperties`, `AltitudeBand`), pure mathematical representations of
//!   the adsorption isotherms (`langmuir`, `freundlich`, `toth`), the
//!   temperature-swing regeneration model, and the CSV/JSON boundary for the
//!   material feature table.
//!
//! - **[`engine`]: The Logic Core.** Implements the site optimizer: the
//!   multi-factor performance scoring, configuration of scoring weights, the
//!   error taxonomy, and the progress-reporting seam used by front-ends.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute complete procedures,
//!   such as ranking every material in a feature table for one site and
//!   summarizing a dataset for reporting.

pub mod core;
pub mod engine;
pub mod workflows;
