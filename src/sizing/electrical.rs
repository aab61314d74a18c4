//! Line current, breaker rating, and cable runs at the connection point.

use tracing::debug;

use super::rounding::ceil_count;
use super::types::ElectricalSummary;

/// Ampacity assumed for one 300 mm² conductor run (A).
pub const CABLE_300MM_AMPACITY_A: f64 = 446.0;

/// Breaker sizing factor over continuous current.
pub const BREAKER_FACTOR: f64 = 1.25;

/// Three-phase line current for a given real power.
///
/// Returns 0 when voltage or power factor is not positive.
pub fn line_current_amps(power_mw: f64, voltage_kv: f64, power_factor: f64) -> f64 {
    if voltage_kv > 0.0 && power_factor > 0.0 {
        power_mw * 1_000_000.0 / (3.0_f64.sqrt() * voltage_kv * 1000.0 * power_factor)
    } else {
        0.0
    }
}

/// Number of parallel 300 mm² runs per phase needed for `current_amps`.
pub fn cable_run_count(current_amps: f64) -> u64 {
    if current_amps <= 0.0 {
        return 0;
    }
    ceil_count(current_amps / CABLE_300MM_AMPACITY_A)
}

/// Cable remark for the main connection.
///
/// # Examples
///
/// ```
/// use bess_sizing::sizing::electrical::cable_runs_300mm;
///
/// assert_eq!(cable_runs_300mm(0.0), "No current");
/// assert_eq!(cable_runs_300mm(446.0), "Use 300mm² cable, 1 run per phase");
/// assert_eq!(cable_runs_300mm(447.0), "Use 300mm² cable, 2 runs per phase");
/// ```
pub fn cable_runs_300mm(current_amps: f64) -> String {
    match cable_run_count(current_amps) {
        0 => "No current".to_string(),
        1 => "Use 300mm² cable, 1 run per phase".to_string(),
        runs => format!("Use 300mm² cable, {runs} runs per phase"),
    }
}

impl ElectricalSummary {
    /// Derives current, breaker rating, and cable remark.
    pub fn derive(power_mw: f64, voltage_kv: f64, power_factor: f64) -> Self {
        let current_amps = line_current_amps(power_mw, voltage_kv, power_factor);
        let breaker_amps = current_amps * BREAKER_FACTOR;
        let cable_recommendation = cable_runs_300mm(current_amps);
        debug!(current_amps, breaker_amps, cable = %cable_recommendation, "electrical summary");
        Self {
            current_amps,
            breaker_amps,
            cable_recommendation,
        }
    }
}
