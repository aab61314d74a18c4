//! Battery energy storage system (BESS) sizing calculator.

pub mod cli;
/// TOML input files and presets.
pub mod config;
pub mod error;
pub mod io;
pub mod report;
/// Capacity chain, equipment catalog, electrical figures, and best-fit selection.
pub mod sizing;

pub use error::{SizingError, SizingResult};
