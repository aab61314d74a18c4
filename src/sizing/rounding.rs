//! Spreadsheet-compatible rounding helpers.
//!
//! `ROUNDUP(x, 4)` in a spreadsheet works on the decimal value the user sees,
//! so `ROUNDUP(0.1 + 0.2, 4)` is `0.3`. A bare `ceil(x * 10000)` on binary
//! floats returns `0.3001` there. [`spreadsheet_ceil`] snaps values that sit
//! within a tiny relative distance of an integer before taking the ceiling.

/// Relative distance under which a value counts as an exact integer.
const SNAP_TOLERANCE: f64 = 1e-12;

/// Scale factor for four decimal places.
const FOUR_DECIMALS: f64 = 10_000.0;

/// Ceiling that treats float noise around an integer as that integer.
///
/// Negative inputs follow `ceil` semantics (toward positive infinity).
///
/// # Examples
///
/// ```
/// use bess_sizing::sizing::rounding::spreadsheet_ceil;
///
/// assert_eq!(spreadsheet_ceil(2.0000000000001), 2.0);
/// assert_eq!(spreadsheet_ceil(2.1), 3.0);
/// assert_eq!(spreadsheet_ceil(-2.5), -2.0);
/// ```
pub fn spreadsheet_ceil(x: f64) -> f64 {
    if is_near_integer(x) {
        x.round()
    } else {
        x.ceil()
    }
}

/// True when `x` lies within the snap tolerance of its nearest integer.
pub(crate) fn is_near_integer(x: f64) -> bool {
    let nearest = x.round();
    (x - nearest).abs() <= SNAP_TOLERANCE * nearest.abs().max(1.0)
}

/// Rounds `x` up to the next multiple of 0.0001.
///
/// Values already on a multiple of 0.0001 are returned unchanged.
pub fn roundup4(x: f64) -> f64 {
    spreadsheet_ceil(x * FOUR_DECIMALS) / FOUR_DECIMALS
}

/// `ROUNDUP(x, 4)` over an optional value: absent in, absent out.
///
/// # Examples
///
/// ```
/// use bess_sizing::sizing::rounding::round_up_to_4_dec;
///
/// assert_eq!(round_up_to_4_dec(None), None);
/// assert_eq!(round_up_to_4_dec(Some(0.5)), Some(0.5));
/// assert_eq!(round_up_to_4_dec(Some(1.23451)), Some(1.2346));
/// ```
pub fn round_up_to_4_dec(x: Option<f64>) -> Option<f64> {
    x.map(roundup4)
}

/// Rounds to two decimals, half away from zero.
pub fn round_to_2_dec(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Ceiling to a non-negative integer count. Non-positive inputs give 0.
pub(crate) fn ceil_count(x: f64) -> u64 {
    let c = spreadsheet_ceil(x);
    if c <= 0.0 {
        0
    } else {
        // Counts are small; the cast saturates on absurd inputs.
        c as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn exact_multiples_are_unchanged() {
        assert_eq!(roundup4(0.5), 0.5);
        assert_eq!(roundup4(8.8), 8.8);
        assert_eq!(roundup4(1.1), 1.1);
        assert_eq!(roundup4(0.0), 0.0);
    }

    #[test]
    fn decimal_exact_sums_are_unchanged() {
        assert_eq!(roundup4(0.1 + 0.2), 0.3);
        assert_eq!(roundup4(7.92 / 0.9), 8.8);
    }

    #[test]
    fn rounds_up_not_to_nearest() {
        assert_eq!(roundup4(1.00001), 1.0001);
        assert_eq!(roundup4(9.926677946982517), 9.9267);
        assert_eq!(roundup4(2.00004999), 2.0001);
    }

    #[test]
    fn negative_values_round_toward_positive_infinity() {
        assert_eq!(roundup4(-1.23456), -1.2345);
        assert_eq!(roundup4(-0.5), -0.5);
    }

    #[test]
    fn optional_passthrough() {
        assert_eq!(round_up_to_4_dec(None), None);
        assert_eq!(round_up_to_4_dec(Some(3.14159)), Some(3.1416));
    }

    #[test]
    fn result_is_ceiling_within_one_step() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let x: f64 = rng.random_range(0.0..1_000.0);
            let r = roundup4(x);
            assert!(r >= x - 1e-9 * x.max(1.0), "roundup4({x}) = {r} is below x");
            assert!(r - x < 0.0001, "roundup4({x}) = {r} overshoots");
        }
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let x: f64 = rng.random_range(0.0..100.0);
            let once = roundup4(x);
            assert_eq!(roundup4(once), once);
        }
    }

    #[test]
    fn two_decimal_rounding() {
        assert_eq!(round_to_2_dec(0.5 + 1.0), 1.5);
        assert_eq!(round_to_2_dec(1.234), 1.23);
        assert_eq!(round_to_2_dec(1.236), 1.24);
    }

    #[test]
    fn counts() {
        assert_eq!(ceil_count(0.0), 0);
        assert_eq!(ceil_count(-3.2), 0);
        assert_eq!(ceil_count(0.1), 1);
        assert_eq!(ceil_count(40.000000000001), 40);
        assert_eq!(ceil_count(40.01), 41);
    }

    #[test]
    fn near_integer_detection() {
        assert!(is_near_integer(2.0));
        assert!(is_near_integer(10.0318 * 1000.0 / 5015.9));
        assert!(!is_near_integer(2.000001));
        assert!(!is_near_integer(0.5));
    }
}
