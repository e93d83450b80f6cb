use std::{fmt::Display, str::FromStr};

use crate::{bar_kind::BarKind, exercise_set::Count, gym_error::GymError, week::Week};

/// Sets and reps at a multiplier of the week's working weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetScheme {
    pub sets: Count,
    pub reps: Count,
    pub multiplier: f64,
}

impl SetScheme {
    const fn warmup(sets: u32, reps: u32, multiplier: f64) -> Self {
        SetScheme {
            sets: Count::Exactly(sets),
            reps: Count::Exactly(reps),
            multiplier,
        }
    }

    const fn top(sets: Count, reps: Count) -> Self {
        SetScheme {
            sets,
            reps,
            multiplier: 1.0,
        }
    }
}

const SQUAT_WARMUPS: [SetScheme; 4] = [
    SetScheme::warmup(2, 5, 0.0),
    SetScheme::warmup(1, 5, 0.4),
    SetScheme::warmup(1, 3, 0.6),
    SetScheme::warmup(1, 2, 0.8),
];

const PRESS_WARMUPS: [SetScheme; 4] = [
    SetScheme::warmup(2, 5, 0.0),
    SetScheme::warmup(1, 5, 0.5),
    SetScheme::warmup(1, 3, 0.7),
    SetScheme::warmup(1, 2, 0.9),
];

const DEADLIFT_WARMUPS: [SetScheme; 3] = [
    SetScheme::warmup(2, 5, 0.4),
    SetScheme::warmup(1, 3, 0.6),
    SetScheme::warmup(1, 2, 0.85),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exercise {
    Squat,
    FrontSquat,
    BenchPress,
    OverheadPress,
    Deadlift,
    WeightedPullup,
}

impl Exercise {
    /// Every exercise, in the order a program prints them.
    pub const ALL: [Exercise; 6] = [
        Exercise::Squat,
        Exercise::FrontSquat,
        Exercise::BenchPress,
        Exercise::OverheadPress,
        Exercise::Deadlift,
        Exercise::WeightedPullup,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::FrontSquat => "front squat",
            Exercise::BenchPress => "bench press",
            Exercise::OverheadPress => "overhead press",
            Exercise::Deadlift => "deadlift",
            Exercise::WeightedPullup => "weighted pullup",
        }
    }

    #[must_use]
    pub fn bar_kind(&self) -> BarKind {
        match self {
            Exercise::WeightedPullup => BarKind::Belt,
            _ => BarKind::Barbell,
        }
    }

    #[must_use]
    pub fn warmups(&self) -> &'static [SetScheme] {
        match self {
            Exercise::Squat | Exercise::FrontSquat => &SQUAT_WARMUPS,
            Exercise::BenchPress | Exercise::OverheadPress => &PRESS_WARMUPS,
            Exercise::Deadlift => &DEADLIFT_WARMUPS,
            Exercise::WeightedPullup => &[],
        }
    }

    /// The working sets for `week`, all at the full working weight.
    #[must_use]
    pub fn top_set(&self, week: Week) -> SetScheme {
        use Count::{Between, Exactly};

        match (self, week.number()) {
            (Exercise::Deadlift, 3 | 5) => SetScheme::top(Between(1, 3), Exactly(3)),
            (Exercise::Deadlift, 6) => SetScheme::top(Between(1, 3), Between(1, 2)),
            (Exercise::Deadlift, _) => SetScheme::top(Between(1, 3), Exactly(5)),
            (_, 3) => SetScheme::top(Between(3, 4), Exactly(3)),
            (_, 5) => SetScheme::top(Between(3, 5), Exactly(3)),
            (_, 6) => SetScheme::top(Between(3, 4), Between(1, 2)),
            _ => SetScheme::top(Between(3, 5), Exactly(5)),
        }
    }
}

impl Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Exercise {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "squat" | "sq" => Ok(Exercise::Squat),
            "front squat" | "fsq" => Ok(Exercise::FrontSquat),
            "bench press" | "bench" | "bp" => Ok(Exercise::BenchPress),
            "overhead press" | "ohp" => Ok(Exercise::OverheadPress),
            "deadlift" | "dl" => Ok(Exercise::Deadlift),
            "weighted pullup" | "weighted pull up" | "wpu" => Ok(Exercise::WeightedPullup),
            _ => Err(GymError::UnknownExercise(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(scheme: SetScheme) -> String {
        format!("{} x {}", scheme.sets, scheme.reps)
    }

    #[test]
    fn parses_names_and_short_forms() {
        assert_eq!(
            "Bench Press".parse::<Exercise>().unwrap(),
            Exercise::BenchPress
        );
        assert_eq!("ohp".parse::<Exercise>().unwrap(), Exercise::OverheadPress);
        assert_eq!(
            "front-squat".parse::<Exercise>().unwrap(),
            Exercise::FrontSquat
        );
        assert_eq!(
            "weighted_pullup".parse::<Exercise>().unwrap(),
            Exercise::WeightedPullup
        );
        assert!("curl".parse::<Exercise>().is_err());
        for exercise in Exercise::ALL {
            assert_eq!(exercise.name().parse::<Exercise>().unwrap(), exercise);
        }
    }

    #[test]
    fn warmup_multipliers() {
        let multipliers = |exercise: Exercise| {
            exercise
                .warmups()
                .iter()
                .map(|scheme| scheme.multiplier)
                .collect::<Vec<_>>()
        };
        assert_eq!(multipliers(Exercise::Squat), vec![0.0, 0.4, 0.6, 0.8]);
        assert_eq!(
            multipliers(Exercise::OverheadPress),
            vec![0.0, 0.5, 0.7, 0.9]
        );
        assert_eq!(multipliers(Exercise::Deadlift), vec![0.4, 0.6, 0.85]);
        assert!(Exercise::WeightedPullup.warmups().is_empty());
    }

    #[test]
    fn squat_style_top_sets() {
        let week = |n| Week::new(n).unwrap();
        assert_eq!(labels(Exercise::Squat.top_set(week(1))), "(3-5) x 5");
        assert_eq!(labels(Exercise::BenchPress.top_set(week(3))), "(3-4) x 3");
        assert_eq!(labels(Exercise::Squat.top_set(week(5))), "(3-5) x 3");
        assert_eq!(
            labels(Exercise::WeightedPullup.top_set(week(6))),
            "(3-4) x (1-2)"
        );
    }

    #[test]
    fn deadlift_top_sets() {
        let week = |n| Week::new(n).unwrap();
        assert_eq!(labels(Exercise::Deadlift.top_set(week(4))), "(1-3) x 5");
        assert_eq!(labels(Exercise::Deadlift.top_set(week(5))), "(1-3) x 3");
        assert_eq!(labels(Exercise::Deadlift.top_set(week(6))), "(1-3) x (1-2)");
    }
}
