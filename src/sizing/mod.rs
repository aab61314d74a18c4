/// Battery catalog, PCS and transformer selection.
pub mod catalog;
/// Efficiency chain for required energy capacity.
pub mod capacity;
pub mod electrical;
pub mod pipeline;
/// Spreadsheet-compatible rounding.
pub mod rounding;
pub mod selector;
pub mod types;

pub use pipeline::size_system;
pub use types::{ConfigurationRow, SizingInputs, SizingReport};
