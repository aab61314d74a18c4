//! Battery catalog evaluation and PCS / transformer selection.

use tracing::debug;

use super::rounding::{ceil_count, is_near_integer};
use super::types::{BatteryModel, CapacityChain, ConfigurationRow};

/// Battery container models offered, in display order.
pub const BATTERY_CATALOG: [BatteryModel; 3] = [
    BatteryModel {
        name: "261 kWh battery",
        capacity_kwh: 261.0,
    },
    BatteryModel {
        name: "3727.36 kWh battery",
        capacity_kwh: 3727.36,
    },
    BatteryModel {
        name: "5015.9 kWh battery",
        capacity_kwh: 5015.9,
    },
];

/// Standard PCS ratings (MW), ascending.
pub const PCS_RATINGS_MW: [f64; 6] = [1.25, 1.50, 1.75, 2.00, 2.50, 5.00];

/// Standard transformer ratings (MVA), ascending.
pub const TRANSFORMER_RATINGS_MVA: [f64; 7] = [1.25, 1.5, 1.75, 2.0, 2.5, 3.5, 5.0];

/// Smallest entry of an ascending table that is `>= value`, else the largest.
fn clamped_ceiling(table: &[f64], value: f64) -> f64 {
    table
        .iter()
        .copied()
        .find(|&rating| value <= rating)
        .or_else(|| table.last().copied())
        .unwrap_or(0.0)
}

/// Selects the PCS rating for one container.
///
/// # Examples
///
/// ```
/// use bess_sizing::sizing::catalog::select_pcs_rating;
///
/// assert_eq!(select_pcs_rating(1.25), 1.25);
/// assert_eq!(select_pcs_rating(1.26), 1.5);
/// assert_eq!(select_pcs_rating(6.0), 5.0);
/// ```
pub fn select_pcs_rating(container_power_mw: f64) -> f64 {
    clamped_ceiling(&PCS_RATINGS_MW, container_power_mw)
}

/// Selects the transformer rating (MVA) for one container.
pub fn select_transformer_rating_mva(container_power_mw: f64) -> f64 {
    clamped_ceiling(&TRANSFORMER_RATINGS_MVA, container_power_mw)
}

/// Formats a rating as a trimmed decimal followed by `MVA`.
///
/// ```
/// use bess_sizing::sizing::catalog::format_mva;
///
/// assert_eq!(format_mva(2.0), "2MVA");
/// assert_eq!(format_mva(1.5), "1.5MVA");
/// assert_eq!(format_mva(1.75), "1.75MVA");
/// ```
pub fn format_mva(rating: f64) -> String {
    let fixed = format!("{rating:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}MVA")
}

/// Selects the transformer class for one container and returns its label.
pub fn select_transformer_mva(container_power_mw: f64) -> String {
    format_mva(select_transformer_rating_mva(container_power_mw))
}

impl ConfigurationRow {
    /// Evaluates one catalog model against the required capacity and power.
    pub fn evaluate(model: &BatteryModel, chain: &CapacityChain) -> Self {
        let required = chain.required_bess_mwh;
        let cap_kwh = model.capacity_kwh;

        let ratio = required * 1000.0 / cap_kwh;
        let unit_count = if required > 0.0 { ceil_count(ratio) } else { 0 };
        // An exact fit may land one ulp below `required` once multiplied back.
        let (total_installed_mwh, oversizing_mwh) = if unit_count > 0 && is_near_integer(ratio) {
            (required, 0.0)
        } else {
            let total = unit_count as f64 * cap_kwh / 1000.0;
            (total, total - required)
        };
        let oversizing_pct = if required > 0.0 {
            oversizing_mwh / required * 100.0
        } else {
            0.0
        };

        let container_power_mw = chain.customer_c_rate * cap_kwh / 1000.0;
        let pcs_rating_mw = select_pcs_rating(container_power_mw);
        let pcs_quantity = if pcs_rating_mw > 0.0 {
            ceil_count(chain.required_discharge_power_mw / pcs_rating_mw)
        } else {
            0
        };

        Self {
            model: model.name,
            unit_capacity_kwh: cap_kwh,
            unit_count,
            total_installed_mwh,
            oversizing_mwh,
            oversizing_pct,
            container_c_rate: chain.customer_c_rate,
            pcs_rating_mw,
            pcs_quantity,
            transformer_label: select_transformer_mva(container_power_mw),
        }
    }
}

/// Evaluates every model of `catalog`, preserving catalog order.
pub fn evaluate_catalog(catalog: &[BatteryModel], chain: &CapacityChain) -> Vec<ConfigurationRow> {
    catalog
        .iter()
        .map(|model| {
            let row = ConfigurationRow::evaluate(model, chain);
            debug!(
                model = row.model,
                units = row.unit_count,
                oversizing_mwh = row.oversizing_mwh,
                pcs_rating_mw = row.pcs_rating_mw,
                transformer = %row.transformer_label,
                "evaluated catalog entry"
            );
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn chain(required_bess_mwh: f64, power_mw: f64, c_rate: f64) -> CapacityChain {
        CapacityChain {
            initial_mwh: required_bess_mwh,
            after_dod_mwh: required_bess_mwh,
            after_rte_mwh: required_bess_mwh,
            after_other_eff_mwh: required_bess_mwh,
            required_bess_mwh,
            required_discharge_power_mw: power_mw,
            customer_c_rate: c_rate,
        }
    }

    #[test]
    fn pcs_lookup_is_clamped_ceiling() {
        assert_eq!(select_pcs_rating(0.0), 1.25);
        assert_eq!(select_pcs_rating(1.25), 1.25);
        assert_eq!(select_pcs_rating(1.26), 1.5);
        assert_eq!(select_pcs_rating(2.0), 2.0);
        assert_eq!(select_pcs_rating(2.6), 5.0);
        assert_eq!(select_pcs_rating(6.0), 5.0);
    }

    #[test]
    fn transformer_lookup_and_labels() {
        assert_eq!(select_transformer_mva(0.065), "1.25MVA");
        assert_eq!(select_transformer_mva(1.254), "1.5MVA");
        assert_eq!(select_transformer_mva(1.6), "1.75MVA");
        assert_eq!(select_transformer_mva(1.9), "2MVA");
        assert_eq!(select_transformer_mva(3.0), "3.5MVA");
        assert_eq!(select_transformer_mva(9.0), "5MVA");
    }

    #[test]
    fn reference_rows() {
        let rows = evaluate_catalog(&BATTERY_CATALOG, &chain(9.9267, 0.99, 0.25));
        let counts: Vec<u64> = rows.iter().map(|r| r.unit_count).collect();
        assert_eq!(counts, vec![39, 3, 2]);

        assert!((rows[0].total_installed_mwh - 10.179).abs() < 1e-9);
        assert!((rows[1].total_installed_mwh - 11.18208).abs() < 1e-9);
        assert!((rows[2].total_installed_mwh - 10.0318).abs() < 1e-9);
        assert!((rows[2].oversizing_mwh - 0.1051).abs() < 1e-9);

        assert_eq!(rows[0].pcs_rating_mw, 1.25);
        assert_eq!(rows[1].pcs_rating_mw, 1.25);
        assert_eq!(rows[2].pcs_rating_mw, 1.5);
        assert!(rows.iter().all(|r| r.pcs_quantity == 1));
        assert_eq!(rows[2].transformer_label, "1.5MVA");
        assert!(rows.iter().all(|r| r.container_c_rate == 0.25));
    }

    #[test]
    fn zero_requirement_gives_empty_rows() {
        let rows = evaluate_catalog(&BATTERY_CATALOG, &chain(0.0, 0.0, 0.25));
        for row in &rows {
            assert_eq!(row.unit_count, 0);
            assert_eq!(row.total_installed_mwh, 0.0);
            assert_eq!(row.oversizing_mwh, 0.0);
            assert_eq!(row.oversizing_pct, 0.0);
            assert_eq!(row.pcs_quantity, 0);
        }
    }

    #[test]
    fn exact_fit_does_not_add_a_unit() {
        // 40 * 261 kWh = 10.44 MWh
        let rows = evaluate_catalog(&BATTERY_CATALOG, &chain(10.44, 1.0, 0.25));
        assert_eq!(rows[0].unit_count, 40);
        assert_eq!(rows[0].oversizing_mwh, 0.0);
    }

    #[test]
    fn exact_fit_is_never_below_requirement() {
        // 2 * 5015.9 kWh; the plain product is 10.031799999999999
        let rows = evaluate_catalog(&BATTERY_CATALOG, &chain(10.0318, 1.0, 0.25));
        let row = &rows[2];
        assert_eq!(row.unit_count, 2);
        assert!(row.total_installed_mwh >= 10.0318);
        assert_eq!(row.oversizing_mwh, 0.0);
        assert!(row.oversizing_mwh.is_sign_positive());
        assert_eq!(row.oversizing_pct, 0.0);
        assert!(row.oversizing_pct.is_sign_positive());
    }

    #[test]
    fn pcs_quantity_covers_discharge_power() {
        let rows = evaluate_catalog(&BATTERY_CATALOG, &chain(20.0, 4.0, 0.5));
        // 0.5C on 5015.9 kWh is 2.51 MW, above every PCS but the 5 MW one
        assert_eq!(rows[2].pcs_rating_mw, 5.0);
        assert_eq!(rows[2].pcs_quantity, 1);
        // 0.5C on 261 kWh fits the smallest PCS
        assert_eq!(rows[0].pcs_rating_mw, 1.25);
        assert_eq!(rows[0].pcs_quantity, 4);
    }

    #[test]
    fn never_undersized_and_unit_count_minimal() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..2_000 {
            let required: f64 = rng.random_range(0.001..500.0);
            let rows = evaluate_catalog(&BATTERY_CATALOG, &chain(required, 1.0, 0.25));
            for row in rows {
                assert!(
                    row.total_installed_mwh >= required,
                    "{} undersized for {required}",
                    row.model
                );
                let one_less = (row.unit_count - 1) as f64 * row.unit_capacity_kwh / 1000.0;
                assert!(one_less < required, "{} not minimal for {required}", row.model);
            }
        }
    }
}
