//! Core sizing types: the input record, catalog entries, and output records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

/// Intended use of the storage system. Carried through for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Application {
    /// Time-of-use arbitrage.
    #[default]
    TouArbitrage,
    PeakShaving,
    BackupBlackStart,
    FrequencyRegulation,
    Other,
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TouArbitrage => "Time of Use (TOU) Arbitrage",
            Self::PeakShaving => "Peak shaving",
            Self::BackupBlackStart => "Backup / Black start",
            Self::FrequencyRegulation => "Frequency regulation",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Site ambient environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbientEnvironment {
    #[default]
    Inland,
    Coastal,
    HarshIndustrial,
}

impl fmt::Display for AmbientEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Inland => "Inland",
            Self::Coastal => "Coastal",
            Self::HarshIndustrial => "Harsh / Industrial",
        };
        f.write_str(label)
    }
}

/// Container cooling technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingSystem {
    #[default]
    Liquid,
    Air,
}

impl fmt::Display for CoolingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Liquid => "Liquid cooling system",
            Self::Air => "Air cooling",
        };
        f.write_str(label)
    }
}

/// Qualitative project information.
///
/// None of these fields feed into the computation; they are echoed in the
/// report so the output documents the full input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInfo {
    /// Intended application.
    pub application: Application,
    /// Ambient environment of the site.
    pub environment: AmbientEnvironment,
    /// Cooling system of the containers.
    pub cooling: CoolingSystem,
    /// Charge/discharge cycles per day (>= 0).
    pub cycles_per_day: f64,
    /// Whether black-start capability is required.
    pub black_start: bool,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            application: Application::default(),
            environment: AmbientEnvironment::default(),
            cooling: CoolingSystem::default(),
            cycles_per_day: 1.0,
            black_start: false,
        }
    }
}

impl ProjectInfo {
    /// Display label for the black-start flag.
    pub fn black_start_label(&self) -> &'static str {
        if self.black_start {
            "Required"
        } else {
            "Not required"
        }
    }
}

/// Immutable snapshot of every value the sizing pipeline consumes.
///
/// Percentages are expressed in percent (e.g. `90.0` for 90 %), powers in
/// MW, and voltage in kV.
///
/// # Examples
///
/// ```
/// use bess_sizing::sizing::types::SizingInputs;
///
/// let inputs = SizingInputs::default();
/// assert_eq!(inputs.load_mw, 0.99);
/// assert!(inputs.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingInputs {
    /// Customer load supported by the BESS (MW).
    pub load_mw: f64,
    /// Discharge duration (hours).
    pub discharge_h: f64,
    /// Depth of discharge (%).
    pub dod_percent: f64,
    /// Round-trip efficiency (%).
    pub rte_percent: f64,
    /// Any further efficiency losses (%).
    pub other_eff_percent: f64,
    /// Customer C-rate.
    pub c_rate: f64,
    /// Charging power available from the grid (MW).
    pub grid_charging_mw: f64,
    /// Charging power available from other sources (MW).
    pub other_charging_mw: f64,
    /// System voltage (kV).
    pub voltage_kv: f64,
    /// Power factor.
    pub power_factor: f64,
    /// Qualitative project information.
    pub project: ProjectInfo,
}

impl Default for SizingInputs {
    fn default() -> Self {
        Self {
            load_mw: 0.99,
            discharge_h: 8.0,
            dod_percent: 90.0,
            rte_percent: 88.65,
            other_eff_percent: 100.0,
            c_rate: 0.25,
            grid_charging_mw: 0.5,
            other_charging_mw: 1.0,
            voltage_kv: 0.4,
            power_factor: 0.85,
            project: ProjectInfo::default(),
        }
    }
}

impl SizingInputs {
    /// Checks every range constraint and returns one violation per bad field.
    ///
    /// Field names are the bare struct field names; callers that load from a
    /// file may prefix them with a section path.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut errors = Vec::new();

        non_negative(&mut errors, "load_mw", self.load_mw);
        non_negative(&mut errors, "discharge_h", self.discharge_h);
        percent(&mut errors, "dod_percent", self.dod_percent);
        percent(&mut errors, "rte_percent", self.rte_percent);
        percent(&mut errors, "other_eff_percent", self.other_eff_percent);
        unit_interval(&mut errors, "c_rate", self.c_rate);
        non_negative(&mut errors, "grid_charging_mw", self.grid_charging_mw);
        non_negative(&mut errors, "other_charging_mw", self.other_charging_mw);
        if !self.voltage_kv.is_finite() || self.voltage_kv <= 0.0 {
            errors.push(violation("voltage_kv", "must be > 0"));
        }
        unit_interval(&mut errors, "power_factor", self.power_factor);
        non_negative(
            &mut errors,
            "cycles_per_day",
            self.project.cycles_per_day,
        );

        errors
    }
}

fn violation(field: &'static str, message: &'static str) -> FieldViolation {
    FieldViolation { field, message }
}

fn non_negative(errors: &mut Vec<FieldViolation>, field: &'static str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(violation(field, "must be a finite value >= 0"));
    }
}

fn percent(errors: &mut Vec<FieldViolation>, field: &'static str, value: f64) {
    if !value.is_finite() || value <= 0.0 || value > 100.0 {
        errors.push(violation(field, "must be in (0, 100]"));
    }
}

fn unit_interval(errors: &mut Vec<FieldViolation>, field: &'static str, value: f64) {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        errors.push(violation(field, "must be in (0, 1]"));
    }
}

/// A battery container model from the equipment catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatteryModel {
    /// Display name.
    pub name: &'static str,
    /// Usable energy of one unit (kWh).
    pub capacity_kwh: f64,
}

/// Results of the efficiency chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityChain {
    /// `load_mw * discharge_h`, unrounded.
    pub initial_mwh: f64,
    /// Energy after the depth-of-discharge division.
    pub after_dod_mwh: f64,
    /// Energy after the round-trip efficiency division.
    pub after_rte_mwh: f64,
    /// Energy after the other-efficiency division.
    pub after_other_eff_mwh: f64,
    /// Capacity the installation must provide (MWh).
    pub required_bess_mwh: f64,
    /// Discharge power the installation must deliver (MW).
    pub required_discharge_power_mw: f64,
    /// C-rate selected by the customer.
    pub customer_c_rate: f64,
}

/// One row of the equipment comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationRow {
    pub model: &'static str,
    pub unit_capacity_kwh: f64,
    pub unit_count: u64,
    pub total_installed_mwh: f64,
    /// Installed minus required capacity; negative means undersized.
    pub oversizing_mwh: f64,
    pub oversizing_pct: f64,
    pub container_c_rate: f64,
    pub pcs_rating_mw: f64,
    pub pcs_quantity: u64,
    pub transformer_label: String,
}

/// Line current and protection figures at the point of connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricalSummary {
    /// Three-phase line current (A).
    pub current_amps: f64,
    /// Main breaker rating at 125 % of line current (A).
    pub breaker_amps: f64,
    /// Cable sizing remark.
    pub cable_recommendation: String,
}

/// Complete output of one sizing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    /// The input snapshot the report was computed from.
    pub inputs: SizingInputs,
    pub capacity: CapacityChain,
    /// Total charging power available, rounded to 2 decimals (MW).
    pub charging_power_mw: f64,
    /// One row per catalog model, in catalog order.
    pub configurations: Vec<ConfigurationRow>,
    /// Index into `configurations` of the suggested row.
    pub best_fit: Option<usize>,
    pub electrical: ElectricalSummary,
}

impl SizingReport {
    /// The suggested configuration row, if any.
    pub fn best_fit_row(&self) -> Option<&ConfigurationRow> {
        self.best_fit.and_then(|i| self.configurations.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let errors = SizingInputs::default().validate();
        assert!(errors.is_empty(), "defaults should be valid: {errors:?}");
    }

    #[test]
    fn zero_percentage_is_rejected() {
        let inputs = SizingInputs {
            rte_percent: 0.0,
            ..SizingInputs::default()
        };
        let errors = inputs.validate();
        assert_eq!(
            errors,
            vec![FieldViolation {
                field: "rte_percent",
                message: "must be in (0, 100]",
            }]
        );
    }

    #[test]
    fn percentage_above_hundred_is_rejected() {
        let inputs = SizingInputs {
            dod_percent: 100.5,
            ..SizingInputs::default()
        };
        let errors = inputs.validate();
        assert!(errors.iter().any(|e| e.field == "dod_percent"));
    }

    #[test]
    fn every_bad_field_is_reported() {
        let inputs = SizingInputs {
            load_mw: -1.0,
            c_rate: 1.5,
            voltage_kv: 0.0,
            power_factor: f64::NAN,
            ..SizingInputs::default()
        };
        assert_eq!(inputs.validate().len(), 4);
    }

    #[test]
    fn hundred_percent_and_unit_c_rate_are_accepted() {
        let inputs = SizingInputs {
            dod_percent: 100.0,
            c_rate: 1.0,
            power_factor: 1.0,
            ..SizingInputs::default()
        };
        assert!(inputs.validate().is_empty());
    }

    #[test]
    fn qualitative_labels() {
        let project = ProjectInfo::default();
        assert_eq!(project.application.to_string(), "Time of Use (TOU) Arbitrage");
        assert_eq!(project.environment.to_string(), "Inland");
        assert_eq!(project.cooling.to_string(), "Liquid cooling system");
        assert_eq!(project.black_start_label(), "Not required");
        assert_eq!(AmbientEnvironment::HarshIndustrial.to_string(), "Harsh / Industrial");
    }
}
