//! Text rendering of a sizing report.
//!
//! Formatting lives here so the arithmetic in [`crate::sizing`] stays free of
//! presentation concerns.

use std::fmt;

use comfy_table::{Attribute, Cell, Color, Table, presets::UTF8_FULL};

use crate::sizing::types::{ConfigurationRow, SizingReport};

/// Formats `value` with `decimals` places and `,` thousands separators.
///
/// ```
/// use bess_sizing::report::format_thousands;
///
/// assert_eq!(format_thousands(1681.108, 2), "1,681.11");
/// assert_eq!(format_thousands(-1234567.0, 0), "-1,234,567");
/// assert_eq!(format_thousands(0.5, 4), "0.5000");
/// ```
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Builds the per-model comparison table with the best fit highlighted.
fn configuration_table(report: &SizingReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Model").add_attribute(Attribute::Bold),
        Cell::new("Unit\n(kWh)").add_attribute(Attribute::Bold),
        Cell::new("Units").add_attribute(Attribute::Bold),
        Cell::new("Total\n(MWh)").add_attribute(Attribute::Bold),
        Cell::new("Oversizing\n(MWh)").add_attribute(Attribute::Bold),
        Cell::new("Oversizing\n(%)").add_attribute(Attribute::Bold),
        Cell::new("C-rate").add_attribute(Attribute::Bold),
        Cell::new("PCS\n(MW)").add_attribute(Attribute::Bold),
        Cell::new("PCS\nqty").add_attribute(Attribute::Bold),
        Cell::new("Transformer").add_attribute(Attribute::Bold),
    ]);

    for (idx, row) in report.configurations.iter().enumerate() {
        let model_cell = if report.best_fit == Some(idx) {
            Cell::new(row.model)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(row.model)
        };

        table.add_row(vec![
            model_cell,
            Cell::new(format_thousands(row.unit_capacity_kwh, 2)),
            Cell::new(row.unit_count),
            Cell::new(format_thousands(row.total_installed_mwh, 4)),
            Cell::new(format_thousands(row.oversizing_mwh, 4)),
            Cell::new(format_thousands(row.oversizing_pct, 2)),
            Cell::new(format!("{:.2}", row.container_c_rate)),
            Cell::new(format!("{:.2}", row.pcs_rating_mw)),
            Cell::new(row.pcs_quantity),
            Cell::new(&row.transformer_label),
        ]);
    }

    table
}

/// Borrowed view that renders only the suggested configuration.
pub struct SuggestedConfiguration<'a>(pub &'a ConfigurationRow);

impl fmt::Display for SuggestedConfiguration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.0;
        writeln!(f, "--- Suggested Configuration ---")?;
        writeln!(f, "Battery model:            {}", row.model)?;
        writeln!(f, "Number of units:          {}", row.unit_count)?;
        writeln!(
            f,
            "Total installed capacity: {:.4} MWh",
            row.total_installed_mwh
        )?;
        writeln!(
            f,
            "Oversizing:               {:.4} MWh ({:.2}%)",
            row.oversizing_mwh, row.oversizing_pct
        )?;
        writeln!(f, "PCS per unit:             ~{:.2} MW", row.pcs_rating_mw)?;
        writeln!(f, "PCS quantity:             {}", row.pcs_quantity)?;
        write!(f, "Transformer per unit:     {}", row.transformer_label)
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = &self.inputs;
        let c = &self.capacity;
        let e = &self.electrical;

        writeln!(f, "--- Required Battery Capacity ---")?;
        writeln!(f, "Customer load:            {:.3} MW", i.load_mw)?;
        writeln!(f, "Discharge duration:       {:.2} h", i.discharge_h)?;
        writeln!(f, "Initial energy:           {:.4} MWh", c.initial_mwh)?;
        writeln!(f, "After DoD:                {:.4} MWh", c.after_dod_mwh)?;
        writeln!(f, "After RTE:                {:.4} MWh", c.after_rte_mwh)?;
        writeln!(f, "After other efficiency:   {:.4} MWh", c.after_other_eff_mwh)?;
        writeln!(f, "Required BESS capacity:   {:.4} MWh", c.required_bess_mwh)?;
        writeln!(
            f,
            "Required discharge power: {:.3} MW",
            c.required_discharge_power_mw
        )?;
        writeln!(f, "Charging power available: {:.2} MW", self.charging_power_mw)?;
        writeln!(f)?;

        writeln!(f, "--- Electrical Summary ---")?;
        writeln!(f, "System voltage:           {:.3} kV", i.voltage_kv)?;
        writeln!(f, "Power factor:             {:.2}", i.power_factor)?;
        writeln!(
            f,
            "Line current:             {} A",
            format_thousands(e.current_amps, 2)
        )?;
        writeln!(
            f,
            "Main breaker (125%):      {} A",
            format_thousands(e.breaker_amps, 2)
        )?;
        writeln!(f, "Cable recommendation:     {}", e.cable_recommendation)?;
        writeln!(f)?;

        let p = &i.project;
        writeln!(f, "--- Project Info ---")?;
        writeln!(f, "Application:              {}", p.application)?;
        writeln!(f, "Environment:              {}", p.environment)?;
        writeln!(f, "Cooling:                  {}", p.cooling)?;
        writeln!(f, "Cycles per day:           {}", p.cycles_per_day)?;
        writeln!(f, "Black start capability:   {}", p.black_start_label())?;
        writeln!(f)?;

        writeln!(f, "--- BESS Configuration Options ---")?;
        writeln!(f, "{}", configuration_table(self))?;

        match self.best_fit_row() {
            Some(row) => {
                writeln!(f)?;
                write!(f, "{}", SuggestedConfiguration(row))
            }
            None => write!(f, "\nNo configuration suggested: required capacity is zero."),
        }
    }
}
