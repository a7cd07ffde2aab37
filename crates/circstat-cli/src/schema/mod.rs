pub mod field;
pub mod stats;
