use std::fmt::Display;

use crate::{
    bar::Bar, bar_kind::BarKind, formatter::WeightFormat, gym::Gym, loadout::Loadout, units,
};

/// Belt loads at or below this are shown without a plate breakdown.
const BELT_BREAKDOWN_MIN: u32 = units::pounds(45);

/// A number of sets or reps, either fixed or a range to choose from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Count {
    Exactly(u32),
    Between(u32, u32),
}

impl Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Count::Exactly(n) => write!(f, "{n}"),
            Count::Between(min, max) => write!(f, "({min}-{max})"),
        }
    }
}

/// A set at a fixed weight, with the plates it takes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseSet {
    sets: Count,
    reps: Count,
    weight: u32,
    bar: Bar,
    loadout: Loadout,
}

/// Formatting-neutral pieces of a set's line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetDescription {
    pub set_rep: String,
    pub weight_label: String,
    pub plate_breakdown: Option<String>,
}

impl ExerciseSet {
    #[must_use]
    pub fn new(sets: Count, reps: Count, weight: u32, gym: &Gym) -> Self {
        ExerciseSet {
            sets,
            reps,
            weight,
            bar: *gym.bar(),
            loadout: gym.decompose(weight),
        }
    }

    #[must_use]
    pub fn sets(&self) -> Count {
        self.sets
    }

    #[must_use]
    pub fn reps(&self) -> Count {
        self.reps
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    #[must_use]
    pub fn set_rep(&self) -> String {
        format!("{} x {}", self.sets, self.reps)
    }

    /// `"Bar"` for an empty barbell, `"Bodyweight"` for an empty belt,
    /// otherwise the plates for one side.
    #[must_use]
    pub fn plate_breakdown(&self) -> String {
        if !self.loadout.is_empty() {
            return self.loadout.to_string();
        }
        match self.bar.kind() {
            BarKind::Barbell => "Bar".to_string(),
            BarKind::Belt => "Bodyweight".to_string(),
        }
    }

    #[must_use]
    pub fn describe(&self, format: &WeightFormat) -> SetDescription {
        if self.bar.kind() == BarKind::Belt && self.weight == 0 {
            return SetDescription {
                set_rep: self.set_rep(),
                weight_label: self.plate_breakdown(),
                plate_breakdown: None,
            };
        }

        let show_breakdown = match self.bar.kind() {
            BarKind::Barbell => true,
            BarKind::Belt => self.weight > BELT_BREAKDOWN_MIN,
        };

        SetDescription {
            set_rep: self.set_rep(),
            weight_label: format.format_weight(self.weight),
            plate_breakdown: show_breakdown.then(|| self.plate_breakdown()),
        }
    }
}

impl Display for SetDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.set_rep, self.weight_label)?;
        if let Some(breakdown) = &self.plate_breakdown {
            write!(f, " - {breakdown}")?;
        }
        Ok(())
    }
}
