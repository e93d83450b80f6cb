use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;
use tracing::warn;

use crate::plate::Plate;

/// Upper bound on how many sub-loadouts [`Loadout::sub_loadouts`] will list.
pub const MAX_SUB_LOADOUTS: usize = 4096;

/// The plates hanging from one side of a bar, counted per denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Loadout {
    plates: BTreeMap<Plate, usize>,
}

impl Loadout {
    #[must_use]
    pub fn new(plates: impl IntoIterator<Item = (Plate, usize)>) -> Self {
        Loadout {
            plates: plates.into_iter().filter(|(_, count)| *count > 0).collect(),
        }
    }

    #[must_use]
    pub fn from_plates(plates: impl IntoIterator<Item = Plate>) -> Self {
        Loadout::new(plates.into_iter().counts())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    #[must_use]
    pub fn count(&self, plate: Plate) -> usize {
        self.plates.get(&plate).copied().unwrap_or_default()
    }

    /// Every plate on this side, heaviest first.
    #[must_use]
    pub fn plates(&self) -> Vec<Plate> {
        self.plates
            .iter()
            .rev()
            .flat_map(|(plate, count)| std::iter::repeat_n(*plate, *count))
            .collect()
    }

    #[must_use]
    pub fn plate_count(&self) -> usize {
        self.plates.values().sum()
    }

    #[must_use]
    pub fn per_side(&self) -> u32 {
        self.plates
            .iter()
            .map(|(plate, count)| plate.weight() * u32::try_from(*count).unwrap_or(u32::MAX))
            .sum()
    }

    /// True when `other` can be reached from `self` by adding plates only.
    #[must_use]
    pub fn is_subset_of(&self, other: &Loadout) -> bool {
        self.plates
            .iter()
            .all(|(plate, count)| other.count(*plate) >= *count)
    }

    /// Every loadout reachable by taking some of these plates off, including
    /// the empty one and `self`. Empty when there would be more than
    /// [`MAX_SUB_LOADOUTS`] of them.
    #[must_use]
    pub fn sub_loadouts(&self) -> Vec<Loadout> {
        let combinations = self
            .plates
            .values()
            .try_fold(1usize, |acc, count| acc.checked_mul(count + 1));

        match combinations {
            Some(n) if n <= MAX_SUB_LOADOUTS => {}
            _ => {
                warn!(
                    loadout = %self,
                    "Too many plate combinations to search, leaving weight as is"
                );
                return Vec::new();
            }
        }

        if self.is_empty() {
            return vec![Loadout::default()];
        }

        self.plates
            .iter()
            .map(|(plate, count)| (0..=*count).map(move |n| (*plate, n)))
            .multi_cartesian_product()
            .map(Loadout::new)
            .collect()
    }
}

impl Display for Loadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .plates
            .iter()
            .rev()
            .map(|(plate, count)| match count {
                1 => plate.to_string(),
                _ => format!("({plate} x {count})"),
            })
            .join(" ");
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::pounds;

    fn loadout(weights: &[u32]) -> Loadout {
        Loadout::from_plates(Plate::from_weights(weights))
    }

    #[test]
    fn renders_repeated_plates_grouped() {
        let side = loadout(&[
            pounds(45),
            pounds(45),
            pounds(45),
            pounds(35),
            pounds(5),
            2500,
        ]);
        assert_eq!(side.to_string(), "(45 x 3) 35 5 2.5");
        assert_eq!(loadout(&[]).to_string(), "");
    }

    #[test]
    fn empty_is_subset_of_everything() {
        assert!(loadout(&[]).is_subset_of(&loadout(&[pounds(45)])));
        assert!(loadout(&[]).is_subset_of(&loadout(&[])));
    }

    #[test]
    fn subset_requires_enough_of_every_plate() {
        let base = loadout(&[pounds(45), pounds(15)]);
        assert!(
            base.is_subset_of(&loadout(&[pounds(45), pounds(15), pounds(5)]))
        );
        assert!(!loadout(&[pounds(45), pounds(25)]).is_subset_of(&loadout(&[
            pounds(45),
            pounds(35),
            2500
        ])));
        assert!(!loadout(&[pounds(45), pounds(45), pounds(15)]).is_subset_of(&loadout(&[
            pounds(45),
            pounds(45),
            pounds(45)
        ])));
    }

    #[test]
    fn lists_every_sub_loadout() {
        let side = loadout(&[pounds(45), pounds(45), 2500]);
        let subs = side.sub_loadouts();

        assert_eq!(subs.len(), 6);
        assert!(subs.contains(&Loadout::default()));
        assert!(subs.contains(&side));
        assert!(subs.iter().all(|sub| sub.is_subset_of(&side)));
        assert_eq!(
            subs.iter().map(Loadout::per_side).sorted().collect::<Vec<_>>(),
            vec![0, 2500, pounds(45), 47500, pounds(90), 92500]
        );
    }

    #[test]
    fn empty_loadout_has_itself_as_only_sub_loadout() {
        assert_eq!(Loadout::default().sub_loadouts(), vec![Loadout::default()]);
    }

    #[test]
    fn refuses_pathological_enumeration() {
        let side = Loadout::new((1..=13).map(|w| (Plate::new(w * 1000), 1)));
        assert!(side.sub_loadouts().is_empty());
    }
}
