//! # Tabular I/O
//!
//! The boundary between the pure computation layers and the material feature
//! dataset: CSV loading of the feature table and CSV export of ranked results.
//! The computations themselves never touch the filesystem; everything that
//! does lives here.

pub mod table;

pub use table::{TableError, load_material_table, write_ranked_table};
