//! Rounding rules used by the CVSS versions
//!
//! Every version publishes scores with one decimal, but each rounds
//! differently. All helpers work on integers after scaling so that binary
//! representation error cannot move a value across a rounding boundary.

/// Round half up to one decimal (CVSS 2).
///
/// The input is first snapped to nine decimals, which absorbs drift such as
/// `4.6499999999` for an exact `4.65`.
pub fn round_half_up(value: f64) -> f64 {
    let scaled = (value * 1e9).round() as i64;
    (scaled + 50_000_000).div_euclid(100_000_000) as f64 / 10.0
}

/// Smallest one-decimal number greater than or equal to the input (CVSS 3).
///
/// Follows the CVSS 3.1 definition, which works on the input multiplied by
/// 100000 so values such as `4.000000001` round to `4.0`.
pub fn round_up(value: f64) -> f64 {
    let int_input = (value * 100_000.0).round() as i64;
    if int_input % 10_000 == 0 {
        int_input as f64 / 100_000.0
    } else {
        (int_input.div_euclid(10_000) + 1) as f64 / 10.0
    }
}

/// Round to one decimal, ties away from zero, on the exact binary value (CVSS 4).
///
/// `8.725` is stored slightly below the tie and must round to `8.7`, so the
/// comparison is done on the exact mantissa rather than on `value * 10.0`.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let negative = value < 0.0;
    let bits = value.abs().to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    // value * 10 == n * 2^exponent
    let n = u128::from(mantissa) * 10;
    if exponent >= 0 {
        return value;
    }
    let shift = -exponent;
    if shift >= 120 {
        return 0.0;
    }
    let quotient = n >> shift;
    let remainder = n - (quotient << shift);
    let half = 1u128 << (shift - 1);
    let tenths = if remainder >= half { quotient + 1 } else { quotient };

    let rounded = tenths as f64 / 10.0;
    if negative {
        -rounded
    } else {
        rounded
    }
}
