use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use crate::{gym_error::GymError, units};

pub const WEEKS: u8 = 6;

const DEFAULT_PERCENTAGES: [u32; WEEKS as usize] = [70, 80, 90, 75, 85, 95];

/// One week of the six-week block, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(u8);

impl Week {
    ///
    /// # Errors
    /// If `number` is not between 1 and 6.
    ///
    pub fn new(number: u8) -> Result<Self, GymError> {
        if (1..=WEEKS).contains(&number) {
            Ok(Week(number))
        } else {
            Err(GymError::InvalidWeek(number.to_string()))
        }
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Week> {
        (1..=WEEKS).map(Week)
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u8>()
            .map_err(|_| GymError::InvalidWeek(s.to_string()))?;
        Week::new(number)
    }
}

/// Which weeks to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeekSelection {
    #[default]
    All,
    One(Week),
}

impl WeekSelection {
    #[must_use]
    pub fn weeks(&self) -> Vec<Week> {
        match self {
            WeekSelection::All => Week::all().collect(),
            WeekSelection::One(week) => vec![*week],
        }
    }
}

impl FromStr for WeekSelection {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WeekSelection::All),
            _ => s.parse().map(WeekSelection::One),
        }
    }
}

/// Share of the one-rep max lifted in each week's working sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekPercentages([u32; WEEKS as usize]);

impl WeekPercentages {
    /// Overrides the default percentages for the weeks present in `overrides`.
    ///
    /// # Errors
    /// If a key is not a week number.
    ///
    pub fn from_map(overrides: &BTreeMap<u8, u32>) -> Result<Self, GymError> {
        let mut percentages = DEFAULT_PERCENTAGES;
        for (number, percent) in overrides {
            percentages[Week::new(*number)?.index()] = *percent;
        }
        Ok(WeekPercentages(percentages))
    }

    #[must_use]
    pub fn percent(&self, week: Week) -> u32 {
        self.0[week.index()]
    }

    #[must_use]
    pub fn label(&self, week: Week) -> String {
        format!("{}%", self.percent(week))
    }

    /// `one_rep_max` scaled by the week's percentage, to the nearest 5.
    #[must_use]
    pub fn working_weight(&self, week: Week, one_rep_max: u32) -> u32 {
        units::scale(one_rep_max, f64::from(self.percent(week)) / 100.0)
    }
}

impl Default for WeekPercentages {
    fn default() -> Self {
        WeekPercentages(DEFAULT_PERCENTAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::pounds;

    #[test]
    fn labels_follow_percentages() {
        let percentages = WeekPercentages::default();
        let labels = Week::all()
            .map(|week| percentages.label(week))
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["70%", "80%", "90%", "75%", "85%", "95%"]);
    }

    #[test]
    fn working_weight_rounds_to_five() {
        let percentages = WeekPercentages::default();
        assert_eq!(
            percentages.working_weight(Week::new(2).unwrap(), pounds(403)),
            pounds(320)
        );
        assert_eq!(
            percentages.working_weight(Week::new(1).unwrap(), pounds(400)),
            pounds(280)
        );
        assert_eq!(
            percentages.working_weight(Week::new(3).unwrap(), pounds(400)),
            pounds(360)
        );
    }

    #[test]
    fn overrides_single_weeks() {
        let percentages = WeekPercentages::from_map(&BTreeMap::from([(1, 65)])).unwrap();
        assert_eq!(percentages.percent(Week::new(1).unwrap()), 65);
        assert_eq!(percentages.percent(Week::new(2).unwrap()), 80);
        let overrides = BTreeMap::from([(7, 65)]);
        assert!(WeekPercentages::from_map(&overrides).is_err());
    }

    #[test]
    fn parses_week_selection() {
        assert_eq!("all".parse::<WeekSelection>().unwrap(), WeekSelection::All);
        assert_eq!(
            "3".parse::<WeekSelection>().unwrap(),
            WeekSelection::One(Week::new(3).unwrap())
        );
        assert!("7".parse::<WeekSelection>().is_err());
        assert!("0".parse::<WeekSelection>().is_err());
        assert_eq!(WeekSelection::All.weeks().len(), 6);
    }
}
