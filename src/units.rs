//! Weights are carried as `u32` thousandths of a unit (pounds unless configured
//! otherwise), so a 2.5 lb plate is `2500` and a 45 lb bar is `45000`.

use std::cmp::Ordering;

use crate::gym_error::GymError;

pub const SCALE: u32 = 1000;

const FIVE: u32 = 5 * SCALE;

#[must_use]
pub const fn pounds(whole: u32) -> u32 {
    whole * SCALE
}

///
/// # Errors
/// If the value is negative, not finite, or too large to represent.
///
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_pounds(weight: f64) -> Result<u32, GymError> {
    let scaled = (weight * f64::from(SCALE)).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled > f64::from(u32::MAX) {
        return Err(GymError::InvalidWeight(weight.to_string()));
    }
    Ok(scaled as u32)
}

#[must_use]
pub fn to_pounds(weight: u32) -> f64 {
    f64::from(weight) / f64::from(SCALE)
}

///
/// # Errors
/// If the text is not a non-negative decimal number.
///
pub fn parse_pounds(s: &str) -> Result<u32, GymError> {
    let weight = s
        .trim()
        .parse::<f64>()
        .map_err(|_| GymError::InvalidWeight(s.to_string()))?;
    from_pounds(weight)
}

/// Nearest multiple of 5, half-way values go to the even multiple.
#[must_use]
pub fn round_to_five(weight: u32) -> u32 {
    let (quotient, remainder) = (weight / FIVE, weight % FIVE);
    let quotient = match remainder.cmp(&(FIVE / 2)) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };
    quotient * FIVE
}

/// `weight * multiplier`, rounded to the nearest thousandth and then to 5.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale(weight: u32, multiplier: f64) -> u32 {
    let product = (f64::from(weight) * multiplier).round().max(0.0);
    round_to_five(product.min(f64::from(u32::MAX)) as u32)
}

/// Renders `45000` as `45` and `2500` as `2.5`.
#[must_use]
pub fn display(weight: u32) -> String {
    to_pounds(weight).to_string()
}
