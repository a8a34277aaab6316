//! # Workflows Module
//!
//! The highest-level, user-facing procedures. Each workflow ties the `core`
//! and `engine` layers together into one complete operation:
//!
//! - [`rank`] - load a material feature table and produce a ranked report for
//!   one deployment site, including an isotherm simulation of the top
//!   candidate.
//! - [`insights`] - summarize a feature table for the reporting dashboard:
//!   per-column statistics, key findings, and advisory recommendations.

pub mod insights;
pub mod rank;
