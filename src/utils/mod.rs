//! Shared numeric helpers.

/// Round to `decimals` places, ties to the even digit.
///
/// Rounds the value's true decimal expansion, which is what the formatter
/// produces. Scaling by a power of ten and rounding the product is not
/// equivalent: the multiply can land exactly on a tie that the true value
/// sits below (8.33 * 0.95 at three decimals).
///
/// Reported figures are rounded once, at the result boundary; every
/// intermediate value and every comparison stays unrounded.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
