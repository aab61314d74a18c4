//! CSV and JSON rendering of sizing results.

use std::io::{self, Write};

use crate::sizing::types::SizingReport;

/// Column header for the configuration table.
const HEADER: &str = "model,unit_capacity_kwh,unit_count,total_installed_mwh,\
                      oversizing_mwh,oversizing_pct,container_c_rate,\
                      pcs_rating_mw,pcs_quantity,transformer,best_fit";

/// Writes the configuration table as CSV to any writer.
///
/// One header row, then one row per catalog model in catalog order. The
/// `best_fit` column is `true` on the suggested row only.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &SizingReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for (idx, r) in report.configurations.iter().enumerate() {
        wtr.write_record(&[
            r.model.to_string(),
            format!("{:.2}", r.unit_capacity_kwh),
            r.unit_count.to_string(),
            format!("{:.4}", r.total_installed_mwh),
            format!("{:.4}", r.oversizing_mwh),
            format!("{:.2}", r.oversizing_pct),
            format!("{:.2}", r.container_c_rate),
            format!("{:.2}", r.pcs_rating_mw),
            r.pcs_quantity.to_string(),
            r.transformer_label.clone(),
            (report.best_fit == Some(idx)).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the full report as pretty-printed JSON to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if serialization or writing fails.
pub fn write_json(report: &SizingReport, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|err| io::Error::other(format!("serialize report: {err}")))?;
    writeln!(writer)
}
