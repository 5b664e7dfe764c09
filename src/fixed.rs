//! Fixed point number formatting with the rounding behavior of JavaScript's
//! `Number.prototype.toFixed`, which share strings and CSS text depend on.

use crate::Component;

/// Digits printed past the requested precision to detect exact ties.
const TIE_PROBE_DIGITS: usize = 25;

/// Format `value` with exactly `decimals` digits after the decimal point.
///
/// Rounds the exact binary value to nearest, with exact ties rounded away from
/// zero. Negative zero is formatted without a sign.
pub fn to_fixed(value: Component, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Only a negative, non-zero input keeps its sign.
    let value = if value == 0.0 { 0.0 } else { value };

    if is_exact_tie(value, decimals) {
        let scale = 10f64.powi(decimals as i32);
        let rounded = ((value.abs() * scale).floor() + 1.0) / scale;
        let rounded = rounded.copysign(value);
        return format!("{rounded:.decimals$}");
    }

    format!("{value:.decimals$}")
}

/// Format with [`to_fixed`], then strip trailing zeros and a trailing decimal
/// point, e.g. `60.000` becomes `60` and `0.100` becomes `0.1`.
pub fn to_fixed_trimmed(value: Component, decimals: usize) -> String {
    let fixed = to_fixed(value, decimals);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Round to the nearest integer with halves rounded up, as `Math.round` does.
pub fn round_half_up(value: Component) -> Component {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0
}

fn is_exact_tie(value: Component, decimals: usize) -> bool {
    let probe = format!("{:.*}", decimals + TIE_PROBE_DIGITS, value.abs());
    let Some((_, fraction)) = probe.split_once('.') else {
        return false;
    };
    let tail = &fraction[decimals..];
    let mut digits = tail.chars();
    digits.next() == Some('5') && digits.all(|d| d == '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_to_fixed() {
        assert_eq!(to_fixed(60.0, 3), "60.000");
        assert_eq!(to_fixed(0.1, 3), "0.100");
        assert_eq!(to_fixed(0.05, 2), "0.05");
        assert_eq!(to_fixed(240.4, 0), "240");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.25, 3), "-0.250");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn near_ties_follow_the_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.0005 is stored as 0.000500000000000000010...
        assert_eq!(to_fixed(0.0005, 3), "0.001");
    }

    #[test]
    fn trimmed() {
        assert_eq!(to_fixed_trimmed(60.0, 3), "60");
        assert_eq!(to_fixed_trimmed(0.1, 3), "0.1");
        assert_eq!(to_fixed_trimmed(0.05, 2), "0.05");
        assert_eq!(to_fixed_trimmed(0.2, 2), "0.2");
        assert_eq!(to_fixed_trimmed(100.0, 3), "100");
        assert_eq!(to_fixed_trimmed(0.0, 3), "0");
        assert_eq!(to_fixed_trimmed(0.12345, 3), "0.123");
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(127.5), 128.0);
        assert_eq!(round_half_up(0.4), 0.0);
        assert_eq!(round_half_up(-0.5).to_string(), "0");
        assert_eq!(round_half_up(-1.5), -1.0);
    }
}
