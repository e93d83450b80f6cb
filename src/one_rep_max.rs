use std::{fmt::Display, str::FromStr};

use crate::{gym_error::GymError, units};

/// A one-repetition maximum in thousandths, always a whole unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OneRepMax(u32);

impl OneRepMax {
    #[must_use]
    pub fn new(weight: u32) -> Self {
        let rounded = weight.saturating_add(units::SCALE / 2) / units::SCALE;
        OneRepMax(rounded * units::SCALE)
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.0
    }

    /// Parses weighted pull-up input, where the number is the load added on
    /// top of `body_weight`: `"bw"`, `"bwx4"`, `"bw 4"`, `"35x4"`, `"35 4"`
    /// or `"45"`.
    ///
    /// # Errors
    /// If the text is empty, is not one of the forms above, or the total is
    /// too heavy to represent.
    ///
    pub fn weighted_pullup(body_weight: u32, s: &str) -> Result<Self, GymError> {
        let lower = s.trim().to_lowercase();
        let (added, reps) = match lower.strip_prefix("bw") {
            Some("") => (0, 1),
            Some(rest) => {
                let rest = rest.trim_start();
                let rest = rest.strip_prefix('x').unwrap_or(rest);
                (0, parse_reps(rest)?)
            }
            None => parse_set(&lower)?,
        };
        let total = body_weight
            .checked_add(added)
            .ok_or_else(|| GymError::InvalidWeight(s.to_string()))?;
        estimate_one_rep_max(total, reps).map(OneRepMax)
    }
}

/// Epley estimate of a one-rep max from a set of `reps`, to the nearest whole unit.
///
/// # Errors
/// If the weight is zero, reps is zero, or the estimate is too heavy to
/// represent.
///
pub fn estimate_one_rep_max(weight: u32, reps: u32) -> Result<u32, GymError> {
    if weight == 0 {
        return Err(GymError::InvalidWeight(units::display(weight)));
    }
    if reps == 0 {
        return Err(GymError::InvalidReps(reps.to_string()));
    }

    let pounds = units::to_pounds(weight);
    if reps == 1 {
        return whole(pounds);
    }
    whole(pounds * (1.0 + f64::from(reps) / 30.0))
}

fn whole(pounds: f64) -> Result<u32, GymError> {
    units::from_pounds(pounds.round())
}

fn parse_reps(s: &str) -> Result<u32, GymError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| GymError::InvalidReps(s.to_string()))
}

/// `"240x5"`, `"240 x 5"`, `"240 5"` or a lone `"240"` (one rep).
fn parse_set(s: &str) -> Result<(u32, u32), GymError> {
    if let Some((weight, reps)) = s.split_once(['x', 'X']) {
        return Ok((units::parse_pounds(weight)?, parse_reps(reps)?));
    }

    let parts: Vec<&str> = s.split_whitespace().collect();
    match parts.as_slice() {
        [weight] => Ok((units::parse_pounds(weight)?, 1)),
        [weight, reps] => Ok((units::parse_pounds(weight)?, parse_reps(reps)?)),
        _ => Err(GymError::InvalidWeight(s.to_string())),
    }
}

impl FromStr for OneRepMax {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, reps) = parse_set(s.trim())?;
        estimate_one_rep_max(weight, reps).map(OneRepMax)
    }
}

impl Display for OneRepMax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", units::display(self.0))
    }
}
