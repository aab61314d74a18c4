//! Required energy capacity from load, duration, and efficiency losses.

use tracing::debug;

use super::rounding::roundup4;
use super::types::{CapacityChain, SizingInputs};
use crate::error::{SizingError, SizingResult};

impl CapacityChain {
    /// Runs the efficiency chain over a validated input snapshot.
    ///
    /// Each efficiency is applied as a division followed by a round-up to
    /// four decimals, in the order DoD, RTE, other efficiency. The first
    /// product is left unrounded.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::DivisionByZero`] if any of the three
    /// percentages is zero. Range checking is the caller's job
    /// (see [`SizingInputs::validate`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use bess_sizing::sizing::types::{CapacityChain, SizingInputs};
    ///
    /// let chain = CapacityChain::compute(&SizingInputs::default()).unwrap();
    /// assert_eq!(chain.after_dod_mwh, 8.8);
    /// assert_eq!(chain.required_bess_mwh, 9.9267);
    /// ```
    pub fn compute(inputs: &SizingInputs) -> SizingResult<Self> {
        let initial_mwh = inputs.load_mw * inputs.discharge_h;
        let after_dod_mwh = apply_efficiency(initial_mwh, inputs.dod_percent, "dod_percent")?;
        let after_rte_mwh = apply_efficiency(after_dod_mwh, inputs.rte_percent, "rte_percent")?;
        let after_other_eff_mwh = apply_efficiency(
            after_rte_mwh,
            inputs.other_eff_percent,
            "other_eff_percent",
        )?;

        debug!(
            initial_mwh,
            after_dod_mwh, after_rte_mwh, after_other_eff_mwh, "capacity chain"
        );

        Ok(Self {
            initial_mwh,
            after_dod_mwh,
            after_rte_mwh,
            after_other_eff_mwh,
            required_bess_mwh: after_other_eff_mwh,
            required_discharge_power_mw: inputs.load_mw,
            customer_c_rate: inputs.c_rate,
        })
    }
}

/// Divides `energy_mwh` by `percent / 100` and rounds up to 4 decimals.
fn apply_efficiency(energy_mwh: f64, percent: f64, field: &str) -> SizingResult<f64> {
    if percent == 0.0 {
        return Err(SizingError::DivisionByZero {
            field: field.to_string(),
        });
    }
    Ok(roundup4(energy_mwh / (percent / 100.0)))
}
