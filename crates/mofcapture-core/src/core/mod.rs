//! # Core Module
//!
//! Fundamental building blocks for MOF water-capture modeling: the material and
//! site data models, the closed-form adsorption isotherm mathematics, and the
//! tabular I/O boundary.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Material descriptors, altitude bands, and
//!   site reference conditions
//! - **Isotherm Mathematics** ([`isotherm`]) - Langmuir, Freundlich, and Toth
//!   equations plus the heuristic performance simulation
//! - **Tabular I/O** ([`io`]) - Reading the material feature table and writing
//!   ranked results
//! - **Thermal Swing** ([`thermal`]) - Regeneration energy, efficiency, and
//!   degradation-risk modeling
//!
//! Everything in this module is stateless: values are constructed per call,
//! never mutated in place, and hold no references to shared state.

pub mod io;
pub mod isotherm;
pub mod models;
pub mod thermal;
