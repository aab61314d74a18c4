//! TOML-based sizing inputs and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SizingError;
use crate::sizing::types::{Application, ProjectInfo, SizingInputs};

/// Top-level input file parsed from TOML.
///
/// All sections have defaults matching the baseline preset. Load from TOML
/// with [`SizingConfig::from_toml_file`] or use [`SizingConfig::baseline`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizingConfig {
    /// Load, duration, and efficiency figures.
    #[serde(default)]
    pub site: SiteConfig,
    /// C-rate and available charging power.
    #[serde(default)]
    pub operating: OperatingConfig,
    /// Connection voltage and power factor.
    #[serde(default)]
    pub electrical: ElectricalConfig,
    /// Qualitative project information.
    #[serde(default)]
    pub project: ProjectInfo,
}

/// Site load requirements.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Customer load supported by the BESS (MW).
    pub load_mw: f64,
    /// Discharge duration (hours).
    pub discharge_h: f64,
    /// Depth of discharge (%).
    pub dod_percent: f64,
    /// Round-trip efficiency (%).
    pub rte_percent: f64,
    /// Other efficiency (%).
    pub other_eff_percent: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            load_mw: 0.99,
            discharge_h: 8.0,
            dod_percent: 90.0,
            rte_percent: 88.65,
            other_eff_percent: 100.0,
        }
    }
}

/// Operating parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperatingConfig {
    /// Customer C-rate, in (0, 1].
    pub c_rate: f64,
    /// Charging power available from the grid (MW).
    pub grid_charging_mw: f64,
    /// Charging power available from other sources (MW).
    pub other_charging_mw: f64,
}

impl Default for OperatingConfig {
    fn default() -> Self {
        Self {
            c_rate: 0.25,
            grid_charging_mw: 0.5,
            other_charging_mw: 1.0,
        }
    }
}

/// Electrical data at the point of connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElectricalConfig {
    /// Voltage standard (kV).
    pub voltage_kv: f64,
    /// Power factor, in (0, 1].
    pub power_factor: f64,
}

impl Default for ElectricalConfig {
    fn default() -> Self {
        Self {
            voltage_kv: 0.4,
            power_factor: 0.85,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"site.dod_percent"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl From<ConfigError> for SizingError {
    fn from(e: ConfigError) -> Self {
        Self::Config {
            field: e.field,
            message: e.message,
        }
    }
}

/// TOML section holding each input field.
fn section_of(field: &str) -> &'static str {
    match field {
        "c_rate" | "grid_charging_mw" | "other_charging_mw" => "operating",
        "voltage_kv" | "power_factor" => "electrical",
        "cycles_per_day" => "project",
        _ => "site",
    }
}

impl SizingConfig {
    /// Returns the baseline inputs (the calculator's initial form values).
    pub fn baseline() -> Self {
        Self {
            site: SiteConfig::default(),
            operating: OperatingConfig::default(),
            electrical: ElectricalConfig::default(),
            project: ProjectInfo::default(),
        }
    }

    /// Returns the peak-shaving preset: short, high-power discharge at MV.
    pub fn peak_shaving() -> Self {
        Self {
            site: SiteConfig {
                load_mw: 2.5,
                discharge_h: 2.0,
                dod_percent: 95.0,
                rte_percent: 90.0,
                other_eff_percent: 98.0,
            },
            operating: OperatingConfig {
                c_rate: 0.5,
                grid_charging_mw: 3.0,
                other_charging_mw: 0.0,
            },
            electrical: ElectricalConfig {
                voltage_kv: 11.0,
                power_factor: 0.95,
            },
            project: ProjectInfo {
                application: Application::PeakShaving,
                cycles_per_day: 2.0,
                ..ProjectInfo::default()
            },
        }
    }

    /// Returns the backup preset: black-start capable LV installation.
    pub fn backup() -> Self {
        Self {
            site: SiteConfig {
                load_mw: 1.2,
                discharge_h: 4.0,
                other_eff_percent: 97.0,
                ..SiteConfig::default()
            },
            operating: OperatingConfig {
                grid_charging_mw: 1.0,
                other_charging_mw: 0.5,
                ..OperatingConfig::default()
            },
            electrical: ElectricalConfig {
                voltage_kv: 0.48,
                power_factor: 0.9,
            },
            project: ProjectInfo {
                application: Application::BackupBlackStart,
                cycles_per_day: 0.5,
                black_start: true,
                ..ProjectInfo::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "peak_shaving", "backup"];

    /// Loads inputs from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "peak_shaving" => Ok(Self::peak_shaving()),
            "backup" => Ok(Self::backup()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses inputs from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "inputs".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses inputs from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Flattens the sections into the record the sizing pipeline consumes.
    pub fn to_inputs(&self) -> SizingInputs {
        SizingInputs {
            load_mw: self.site.load_mw,
            discharge_h: self.site.discharge_h,
            dod_percent: self.site.dod_percent,
            rte_percent: self.site.rte_percent,
            other_eff_percent: self.site.other_eff_percent,
            c_rate: self.operating.c_rate,
            grid_charging_mw: self.operating.grid_charging_mw,
            other_charging_mw: self.operating.other_charging_mw,
            voltage_kv: self.electrical.voltage_kv,
            power_factor: self.electrical.power_factor,
            project: self.project.clone(),
        }
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        self.to_inputs()
            .validate()
            .into_iter()
            .map(|v| ConfigError {
                field: format!("{}.{}", section_of(v.field), v.field),
                message: v.message.to_string(),
            })
            .collect()
    }
}
