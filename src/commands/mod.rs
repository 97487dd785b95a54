pub mod chunk;
pub mod clean;
pub mod segment;
pub mod stats;
