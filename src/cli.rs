//! Command-line arguments and input overrides.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ConfigError, SizingConfig};

/// Output format for the sizing report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Configuration table as CSV.
    Csv,
    /// Full report as JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bess-sizing", version)]
#[command(about = "Battery energy storage sizing calculator")]
#[command(allow_negative_numbers = true)]
#[command(
    long_about = "Computes required BESS capacity, battery unit counts, PCS and transformer \
    sizing, and main breaker / cable figures.\n\
    \nInputs come from a TOML file (--inputs) or a built-in preset (--preset); \
    individual values can be overridden with the flags below.\n\
    \nExamples:\n  \
    bess-sizing\n  \
    bess-sizing --preset peak_shaving --format json\n  \
    bess-sizing --inputs site.toml --load-mw 1.5 --format csv"
)]
pub struct CliArgs {
    /// Load inputs from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub inputs: Option<PathBuf>,

    /// Use a built-in preset (baseline, peak_shaving, backup)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Customer load supported by the BESS (MW)
    #[arg(long)]
    pub load_mw: Option<f64>,

    /// Discharge duration (hours)
    #[arg(long)]
    pub discharge_h: Option<f64>,

    /// Depth of discharge (%)
    #[arg(long = "dod")]
    pub dod_percent: Option<f64>,

    /// Round-trip efficiency (%)
    #[arg(long = "rte")]
    pub rte_percent: Option<f64>,

    /// Other efficiency (%)
    #[arg(long = "other-eff")]
    pub other_eff_percent: Option<f64>,

    /// Customer C-rate
    #[arg(long)]
    pub c_rate: Option<f64>,

    /// Charging power available from the grid (MW)
    #[arg(long)]
    pub grid_charging_mw: Option<f64>,

    /// Charging power available from other sources (MW)
    #[arg(long)]
    pub other_charging_mw: Option<f64>,

    /// System voltage (kV)
    #[arg(long)]
    pub voltage_kv: Option<f64>,

    /// Power factor
    #[arg(long)]
    pub power_factor: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the base configuration: `--inputs`, then `--preset`, then baseline.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be loaded or the preset is unknown.
    pub fn load_config(&self) -> Result<SizingConfig, ConfigError> {
        if let Some(ref path) = self.inputs {
            SizingConfig::from_toml_file(path)
        } else if let Some(ref name) = self.preset {
            SizingConfig::from_preset(name)
        } else {
            Ok(SizingConfig::baseline())
        }
    }

    /// Applies per-field command-line overrides on top of `cfg`.
    pub fn apply_overrides(&self, cfg: &mut SizingConfig) {
        let overrides = [
            (self.load_mw, &mut cfg.site.load_mw),
            (self.discharge_h, &mut cfg.site.discharge_h),
            (self.dod_percent, &mut cfg.site.dod_percent),
            (self.rte_percent, &mut cfg.site.rte_percent),
            (self.other_eff_percent, &mut cfg.site.other_eff_percent),
            (self.c_rate, &mut cfg.operating.c_rate),
            (self.grid_charging_mw, &mut cfg.operating.grid_charging_mw),
            (self.other_charging_mw, &mut cfg.operating.other_charging_mw),
            (self.voltage_kv, &mut cfg.electrical.voltage_kv),
            (self.power_factor, &mut cfg.electrical.power_factor),
        ];
        for (value, slot) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}
