//! # Data Models
//!
//! Value types shared across the library: material descriptors ([`material`])
//! and deployment-site models ([`site`]). All types are plain owned data,
//! constructed per call and never mutated by the computations that consume
//! them.

pub mod material;
pub mod site;

pub use material::{MaterialError, MaterialProperties, MaterialRecord};
pub use site::{AltitudeBand, Location, SiteConditions};
