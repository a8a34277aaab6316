//! # Engine Module
//!
//! The site-optimization logic: classify a deployment site into an altitude
//! band, score every material in a feature table against that band's
//! reference conditions, and return a deterministically ranked result.
//!
//! - **Configuration** ([`config`]) - scoring weights and their validation
//! - **Optimizer** ([`optimizer`]) - the multi-factor scoring and ranking
//! - **Progress** ([`progress`]) - callback seam for front-end progress bars
//! - **Errors** ([`error`]) - the engine-level error umbrella
//!
//! All operations are synchronous pure computations over immutable inputs;
//! batch scoring may be invoked concurrently from multiple threads without
//! coordination.

pub mod config;
pub mod error;
pub mod optimizer;
pub mod progress;
