use crate::types::Rounding;

// Compensates for binary representation error before rounding
const EPSILON: f64 = 1e-11;

/// Render a value with a fixed number of decimal places
///
/// Rounds at `precision` using integer-scaled arithmetic so values sitting
/// on the rounding boundary are not truncated by their binary
/// representation: `to_fixed(0.615, 2, Rounding::Nearest)` is `"0.62"`,
/// where naive formatting of `0.615` at two places yields `"0.61"`.
///
/// # Arguments
/// * `value` - The value to round
/// * `precision` - Number of digits after the decimal point
/// * `round` - Rounding direction
///
/// # Examples
/// ```
/// use money_format::{Rounding, to_fixed};
///
/// assert_eq!(to_fixed(0.615, 2, Rounding::Nearest), "0.62");
/// assert_eq!(to_fixed(1.0, 3, Rounding::Nearest), "1.000");
/// ```
pub fn to_fixed(value: f64, precision: usize, round: Rounding) -> String {
    let power = 10f64.powi(precision as i32);
    let scaled = value * power + EPSILON;

    let rounded = match round {
        Rounding::Up => scaled.ceil(),
        Rounding::Down => scaled.floor(),
        Rounding::Nearest => scaled.round(),
    };

    format!("{:.precision$}", rounded / power, precision = precision)
}
