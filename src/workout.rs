use std::slice;

use crate::{
    bar::Bar,
    bar_kind::BarKind,
    exercise::{Exercise, SetScheme},
    exercise_set::ExerciseSet,
    formatter::{Formatter, WeightFormat},
    gym::Gym,
    gym_error::GymError,
    one_rep_max::OneRepMax,
    units::{self, pounds},
    warmup::WarmupOptions,
    week::{Week, WeekPercentages},
};

/// Largest jump the enforcer may add to a warm-up to make it additive.
pub const WARMUP_MAX_INCREASE: u32 = pounds(30);

/// Each stage of the warm-up weights for one working weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarmupPlan {
    pub raw: Vec<u32>,
    pub optimized: Vec<u32>,
    pub adjusted: Vec<u32>,
    pub working: u32,
}

/// Works out the warm-ups leading up to `working` for a barbell lift.
#[must_use]
pub fn plan_warmups(gym: &Gym, exercise: Exercise, working: u32) -> WarmupPlan {
    let bar = gym.bar().weight();
    let working = working.max(bar);

    let raw: Vec<u32> = exercise
        .warmups()
        .iter()
        .map(|scheme| units::scale(working, scheme.multiplier).max(bar))
        .collect();

    let options = WarmupOptions::default();
    let optimized: Vec<u32> = raw
        .iter()
        .enumerate()
        .map(|(i, weight)| {
            let next = raw.get(i + 1).copied().unwrap_or(working);
            gym.optimize_single_warmup(*weight, &options.with_next(next))
        })
        .collect();

    let adjusted = gym.compute_linear_warmups(&optimized, working, WARMUP_MAX_INCREASE);

    WarmupPlan {
        raw,
        optimized,
        adjusted,
        working,
    }
}

/// The warm-up and working sets of one exercise for one week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workout {
    exercise: Exercise,
    week: Week,
    working_weight: u32,
    sets: Vec<ExerciseSet>,
}

impl Workout {
    /// Builds the cluster for `exercise` in `week`.
    ///
    /// Weighted pull-ups load `working - body_weight` on a belt and have no
    /// warm-ups.
    ///
    /// # Errors
    /// If a weighted pull-up is requested without a body weight.
    ///
    pub fn new(
        exercise: Exercise,
        week: Week,
        one_rep_max: OneRepMax,
        body_weight: Option<u32>,
        gym: &Gym,
        percentages: &WeekPercentages,
    ) -> Result<Self, GymError> {
        let working = percentages.working_weight(week, one_rep_max.weight());
        let top = exercise.top_set(week);

        if exercise.bar_kind() == BarKind::Belt {
            let body_weight = body_weight.ok_or(GymError::MissingBodyWeight)?;
            let belt = gym.with_bar(Bar::belt())?;
            let added = working.saturating_sub(body_weight);

            return Ok(Workout {
                exercise,
                week,
                working_weight: added,
                sets: vec![top_set(top, added, &belt)],
            });
        }

        let plan = plan_warmups(gym, exercise, working);
        let mut sets: Vec<ExerciseSet> = exercise
            .warmups()
            .iter()
            .zip(&plan.adjusted)
            .map(|(scheme, weight)| {
                ExerciseSet::new(scheme.sets, scheme.reps, *weight, gym)
            })
            .collect();
        sets.push(top_set(top, plan.working, gym));

        Ok(Workout {
            exercise,
            week,
            working_weight: plan.working,
            sets,
        })
    }

    #[must_use]
    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    #[must_use]
    pub fn week(&self) -> Week {
        self.week
    }

    /// Load of the working sets. For weighted pull-ups, the load added to the body.
    #[must_use]
    pub fn working_weight(&self) -> u32 {
        self.working_weight
    }

    #[must_use]
    pub fn sets(&self) -> &[ExerciseSet] {
        &self.sets
    }

    /// One list item per set, the working set in bold.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter, format: &WeightFormat) -> Vec<String> {
        let last = self.sets.len().saturating_sub(1);
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| {
                let line = set.describe(format).to_string();
                if i == last {
                    formatter.list_item(&formatter.bold(&line))
                } else {
                    formatter.list_item(&line)
                }
            })
            .collect()
    }
}

fn top_set(scheme: SetScheme, weight: u32, gym: &Gym) -> ExerciseSet {
    ExerciseSet::new(scheme.sets, scheme.reps, weight, gym)
}

impl<'a> IntoIterator for &'a Workout {
    type Item = &'a ExerciseSet;
    type IntoIter = slice::Iter<'a, ExerciseSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
