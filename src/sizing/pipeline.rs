//! End-to-end sizing run: inputs in, report out.

use tracing::debug;

use super::catalog::{BATTERY_CATALOG, evaluate_catalog};
use super::rounding::round_to_2_dec;
use super::selector::select_best_fit;
use super::types::{CapacityChain, ElectricalSummary, SizingInputs, SizingReport};
use crate::error::SizingResult;

/// Sizes a storage system for one input snapshot.
///
/// Validates the inputs, runs the capacity chain, evaluates the battery
/// catalog, derives the electrical summary, and picks the best-fit row.
/// The function is pure: identical inputs give identical reports.
///
/// # Errors
///
/// Returns the first [`SizingError::InvalidInput`](crate::error::SizingError::InvalidInput)
/// found by [`SizingInputs::validate`]. No partial report is returned.
///
/// # Examples
///
/// ```
/// use bess_sizing::sizing::pipeline::size_system;
/// use bess_sizing::sizing::types::SizingInputs;
///
/// let report = size_system(&SizingInputs::default()).unwrap();
/// assert_eq!(report.configurations.len(), 3);
/// assert_eq!(report.best_fit_row().map(|r| r.model), Some("5015.9 kWh battery"));
/// ```
pub fn size_system(inputs: &SizingInputs) -> SizingResult<SizingReport> {
    if let Some(violation) = inputs.validate().into_iter().next() {
        return Err(violation.into());
    }

    let capacity = CapacityChain::compute(inputs)?;
    let configurations = evaluate_catalog(&BATTERY_CATALOG, &capacity);
    let electrical = ElectricalSummary::derive(
        capacity.required_discharge_power_mw,
        inputs.voltage_kv,
        inputs.power_factor,
    );
    let best_fit = select_best_fit(&configurations, capacity.required_bess_mwh);
    let charging_power_mw = round_to_2_dec(inputs.grid_charging_mw + inputs.other_charging_mw);

    debug!(?best_fit, charging_power_mw, "sizing complete");

    Ok(SizingReport {
        inputs: inputs.clone(),
        capacity,
        charging_power_mw,
        configurations,
        best_fit,
        electrical,
    })
}
