use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    exercise::Exercise,
    formatter::{Formatter, WeightFormat},
    gym::Gym,
    gym_error::GymError,
    one_rep_max::OneRepMax,
    units,
    week::{Week, WeekPercentages},
    workout::Workout,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lift {
    pub one_rep_max: OneRepMax,
    pub body_weight: Option<u32>,
}

/// A titled set of lifts, printed week by week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    title: String,
    gym: Gym,
    percentages: WeekPercentages,
    lifts: BTreeMap<Exercise, Lift>,
}

impl Program {
    #[must_use]
    pub fn new(title: impl Into<String>, gym: Gym, percentages: WeekPercentages) -> Self {
        Program {
            title: title.into(),
            gym,
            percentages,
            lifts: BTreeMap::new(),
        }
    }

    /// Adds or replaces the lift for `exercise`.
    pub fn add_lift(
        &mut self,
        exercise: Exercise,
        one_rep_max: OneRepMax,
        body_weight: Option<u32>,
    ) {
        self.lifts.insert(
            exercise,
            Lift {
                one_rep_max,
                body_weight,
            },
        );
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    #[must_use]
    pub fn lifts(&self) -> &BTreeMap<Exercise, Lift> {
        &self.lifts
    }

    ///
    /// # Errors
    /// If a weighted pull-up has no body weight.
    ///
    pub fn workout(&self, exercise: Exercise, week: Week) -> Result<Option<Workout>, GymError> {
        self.lifts
            .get(&exercise)
            .map(|lift| {
                Workout::new(
                    exercise,
                    week,
                    lift.one_rep_max,
                    lift.body_weight,
                    &self.gym,
                    &self.percentages,
                )
            })
            .transpose()
    }

    /// Renders `weeks` in order, lifts in [`Exercise::ALL`] order.
    ///
    /// # Errors
    /// If a weighted pull-up has no body weight.
    ///
    pub fn render(
        &self,
        weeks: &[Week],
        formatter: &dyn Formatter,
        format: &WeightFormat,
    ) -> Result<String, GymError> {
        let mut lines = vec![formatter.heading(&self.title, 1), String::new()];

        for (i, week) in weeks.iter().enumerate() {
            let heading = format!("WEEK {week} - {}", self.percentages.label(*week));
            lines.push(formatter.heading(&heading, 2));
            lines.push(String::new());

            for (exercise, lift) in &self.lifts {
                let workout = Workout::new(
                    *exercise,
                    *week,
                    lift.one_rep_max,
                    lift.body_weight,
                    &self.gym,
                    &self.percentages,
                )?;
                debug!(
                    exercise = exercise.name(),
                    week = week.number(),
                    working = workout.working_weight(),
                    "Built cluster"
                );

                lines.push(formatter.heading(&exercise.name().to_uppercase(), 3));
                lines.push(String::new());
                lines.push(one_rep_max_line(lift));
                lines.push(String::new());
                lines.extend(workout.render(formatter, format));
                lines.push(String::new());
            }

            if i + 1 < weeks.len() {
                lines.push(String::new());
                lines.push(formatter.horizontal_rule());
                lines.push(String::new());
            }
        }

        Ok(lines.join("\n").trim_end().to_string())
    }
}

fn one_rep_max_line(lift: &Lift) -> String {
    let one_rep_max = lift.one_rep_max.weight();
    match lift.body_weight {
        Some(body_weight) => format!(
            "1RM: {}# @ BW of {}#",
            units::display(one_rep_max.saturating_sub(body_weight)),
            units::display(body_weight)
        ),
        None => format!("1RM: {}#", units::display(one_rep_max)),
    }
}
