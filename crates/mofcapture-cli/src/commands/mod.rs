pub mod rank;
pub mod simulate;
pub mod thermal;
