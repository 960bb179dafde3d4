//! Decimal rounding for reported values

/// Round `value` half-up to `decimals` places.
///
/// Ties round away from zero, which is half-up for the non-negative values
/// this crate reports (BMI, probabilities).
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;

    // From 2^52 up every f64 is integral, so `value` is already exact here
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    scaled.round() / factor
}

/// 2^52
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;
