use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    bar::Bar, bar_kind::BarKind, gym_error::GymError, loadout::Loadout, plate::Plate, units,
};

/// A bar and the plate denominations available to load it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gym {
    bar: Bar,
    plates: Vec<Plate>,
}

impl Gym {
    ///
    /// # Errors
    /// If the barbell weighs nothing, or the plates are empty, contain a zero
    /// plate or list a denomination twice.
    ///
    pub fn new(bar: Bar, plates: &[Plate]) -> Result<Self, GymError> {
        if bar.kind() == BarKind::Barbell && bar.weight() == 0 {
            return Err(GymError::InvalidBarWeight);
        }
        if plates.is_empty() {
            return Err(GymError::EmptyInventory);
        }
        if plates.iter().any(|plate| plate.weight() == 0) {
            return Err(GymError::ZeroPlate);
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = plates.iter().find(|plate| !seen.insert(**plate)) {
            return Err(GymError::DuplicatePlate(duplicate.to_string()));
        }

        Ok(Gym {
            bar,
            plates: plates.iter().copied().sorted().rev().collect(),
        })
    }

    /// The same plates hung from a different bar.
    ///
    /// # Errors
    /// If the new bar is a weightless barbell.
    ///
    pub fn with_bar(&self, bar: Bar) -> Result<Self, GymError> {
        Gym::new(bar, &self.plates)
    }

    #[must_use]
    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    /// Plate denominations, heaviest first.
    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// Greedy per-side decomposition of `total`, rounded to the nearest 5 first.
    ///
    /// Greedy is optimal for the standard plate set; for custom sets it is not
    /// guaranteed to use the fewest plates.
    #[must_use]
    pub fn decompose(&self, total: u32) -> Loadout {
        let rounded = units::round_to_five(total);
        if rounded <= self.bar.weight() {
            return Loadout::default();
        }

        let mut remaining = self.bar.per_side(rounded);
        let mut counts = Vec::new();
        for plate in &self.plates {
            let count = remaining / plate.weight();
            if count > 0 {
                remaining -= count * plate.weight();
                counts.push((*plate, count as usize));
            }
        }

        Loadout::new(counts)
    }

    /// The plates for one side of `total`, heaviest first.
    #[must_use]
    pub fn decompose_to_plates(&self, total: u32) -> Vec<Plate> {
        self.decompose(total).plates()
    }

    /// True when `to` is reached from `from` by adding plates only.
    #[must_use]
    pub fn is_additive(&self, from: u32, to: u32) -> bool {
        self.decompose(from).is_subset_of(&self.decompose(to))
    }

    /// Total weights of every plate-additive predecessor of `next`.
    pub(crate) fn candidates(&self, next: u32) -> Vec<u32> {
        self.decompose(next)
            .sub_loadouts()
            .iter()
            .map(|loadout| self.bar.total(loadout.per_side()))
            .sorted()
            .dedup()
            .collect()
    }
}

impl Default for Gym {
    fn default() -> Self {
        Gym {
            bar: Bar::default(),
            plates: Plate::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::pounds;

    fn plates(gym: &Gym, total: u32) -> Vec<u32> {
        gym.decompose_to_plates(total)
            .iter()
            .map(Plate::weight)
            .collect()
    }

    #[test]
    fn decomposes_heavy_weight() {
        let gym = Gym::default();
        assert_eq!(
            plates(&gym, pounds(400)),
            vec![pounds(45), pounds(45), pounds(45), pounds(35), pounds(5), 2500]
        );
        assert_eq!(gym.decompose(pounds(400)).to_string(), "(45 x 3) 35 5 2.5");
    }

    #[test]
    fn decomposes_single_plate() {
        assert_eq!(plates(&Gym::default(), pounds(135)), vec![pounds(45)]);
    }

    #[test]
    fn bar_or_less_is_empty() {
        let gym = Gym::default();
        assert!(gym.decompose(pounds(45)).is_empty());
        assert!(gym.decompose(pounds(30)).is_empty());
        assert!(gym.decompose(0).is_empty());
    }

    #[test]
    fn rounds_before_decomposing() {
        let gym = Gym::default();
        assert_eq!(plates(&gym, pounds(137)), vec![pounds(45)]);
        assert_eq!(plates(&gym, pounds(138)), vec![pounds(45), 2500]);
    }

    #[test]
    fn uses_custom_plates_and_bar() {
        let gym = Gym::new(
            Bar::default(),
            &Plate::from_weights(&[pounds(45), pounds(25), pounds(10), pounds(5), 2500]),
        )
        .unwrap();
        assert_eq!(gym.decompose(pounds(275)).to_string(), "(45 x 2) 25");

        let gym = Gym::new(
            Bar::default(),
            &Plate::from_weights(&[
                pounds(100),
                pounds(45),
                pounds(25),
                pounds(10),
                pounds(5),
                2500,
            ]),
        )
        .unwrap();
        assert_eq!(gym.decompose(pounds(245)).to_string(), "100");

        let heavy = Plate::from_weights(&[
            pounds(55),
            pounds(45),
            pounds(35),
            pounds(25),
            pounds(10),
            pounds(5),
            2500,
        ]);
        let gym = Gym::new(Bar::default(), &heavy).unwrap();
        assert_eq!(gym.decompose(pounds(240)).to_string(), "55 35 5 2.5");

        let gym = Gym::new(Bar::barbell(pounds(35)), &heavy).unwrap();
        assert_eq!(gym.decompose(pounds(240)).to_string(), "55 45 2.5");
    }

    #[test]
    fn belt_decomposes_whole_load() {
        let gym = Gym::default().with_bar(Bar::belt()).unwrap();
        assert_eq!(gym.decompose(pounds(105)).to_string(), "(45 x 2) 15");
        assert!(gym.decompose(0).is_empty());
    }

    #[test]
    fn stops_when_nothing_fits() {
        let plates = Plate::from_weights(&[pounds(45), pounds(10)]);
        let gym = Gym::new(Bar::default(), &plates).unwrap();
        assert_eq!(gym.decompose(pounds(160)).to_string(), "45 10");
    }

    #[test]
    fn sorts_plates_heaviest_first() {
        let plates = Plate::from_weights(&[2500, pounds(45), pounds(10)]);
        let gym = Gym::new(Bar::default(), &plates).unwrap();
        assert_eq!(
            gym.plates().iter().map(Plate::weight).collect::<Vec<_>>(),
            vec![pounds(45), pounds(10), 2500]
        );
    }

    #[test]
    fn rejects_invalid_configuration() {
        let standard = Plate::standard();
        assert_eq!(
            Gym::new(Bar::barbell(0), &standard),
            Err(GymError::InvalidBarWeight)
        );
        assert_eq!(Gym::new(Bar::default(), &[]), Err(GymError::EmptyInventory));
        assert_eq!(
            Gym::new(Bar::default(), &Plate::from_weights(&[pounds(45), 0])),
            Err(GymError::ZeroPlate)
        );
        let doubled = Plate::from_weights(&[pounds(45), pounds(45)]);
        assert_eq!(
            Gym::new(Bar::default(), &doubled),
            Err(GymError::DuplicatePlate("45".to_string()))
        );
    }

    #[test]
    fn additive_steps() {
        let gym = Gym::default();
        assert!(gym.is_additive(pounds(135), pounds(185)));
        assert!(gym.is_additive(pounds(45), pounds(135)));
        assert!(!gym.is_additive(pounds(185), pounds(210)));
        assert!(!gym.is_additive(pounds(85), pounds(135)));
    }

    #[test]
    fn candidates_are_sorted_predecessors() {
        let gym = Gym::default();
        assert_eq!(
            gym.candidates(pounds(210)),
            vec![
                pounds(45),
                pounds(50),
                pounds(115),
                pounds(120),
                pounds(135),
                pounds(140),
                pounds(205),
                pounds(210)
            ]
        );
    }
}
