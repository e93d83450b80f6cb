use std::fmt::Display;

use crate::{gym_error::GymError, units};

/// Denominations of a standard pound plate set, heaviest first.
pub const DEFAULT_PLATES: [u32; 7] = [45000, 35000, 25000, 15000, 10000, 5000, 2500];

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Plate {
    weight: u32,
}

impl Plate {
    #[must_use]
    pub fn new(weight: u32) -> Self {
        Plate { weight }
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn from_weights(weights: &[u32]) -> Vec<Plate> {
        weights.iter().copied().map(Plate::new).collect()
    }

    ///
    /// # Errors
    /// If any weight is negative or not a number.
    ///
    pub fn from_pounds(weights: &[f64]) -> Result<Vec<Plate>, GymError> {
        weights
            .iter()
            .map(|w| units::from_pounds(*w).map(Plate::new))
            .collect()
    }

    #[must_use]
    pub fn standard() -> Vec<Plate> {
        Self::from_weights(&DEFAULT_PLATES)
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", units::display(self.weight))
    }
}
