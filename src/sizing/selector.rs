//! Best-fit selection over evaluated configuration rows.

use super::types::ConfigurationRow;

/// Index of the row with the least non-negative oversizing.
///
/// Oversizing is clamped at zero before comparison, so an undersized row
/// never wins by having a large negative margin. Ties go to the earliest
/// row. Returns `None` when nothing is required or `rows` is empty.
pub fn select_best_fit(rows: &[ConfigurationRow], required_bess_mwh: f64) -> Option<usize> {
    if required_bess_mwh <= 0.0 {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, row) in rows.iter().enumerate() {
        let margin = row.oversizing_mwh.max(0.0);
        match best {
            Some((_, best_margin)) if margin >= best_margin => {}
            _ => best = Some((i, margin)),
        }
    }
    best.map(|(i, _)| i)
}
