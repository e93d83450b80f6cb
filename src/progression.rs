//! Plate-additive warm-up progressions.
//!
//! Between two sets a lifter should only ever add plates. The rounder fixes a
//! single step by snapping the lighter weight onto a subset of the heavier
//! weight's plates; the enforcer walks a whole warm-up sequence backwards from
//! the working weight until every step is additive or it runs out of passes.

use std::iter;

use tracing::{debug, trace};

use crate::gym::Gym;

/// Passes the enforcer makes before settling for what it has.
pub const MAX_PASSES: usize = 10;

impl Gym {
    /// Adjusts `current` so that `next` is reached by adding plates only.
    ///
    /// Prefers the closest weight at or above `current` (within
    /// `max_increase`) built from `next`'s own plates. Failing that, falls
    /// back to the heaviest such weight below `current` that keeps at least
    /// half of it, or the bare bar. Returns `current` untouched when it is
    /// already additive or nothing qualifies.
    #[must_use]
    pub fn round_to_valid_progression(&self, current: u32, next: u32, max_increase: u32) -> u32 {
        if self.is_additive(current, next) {
            return current;
        }

        let candidates = self.candidates(next);

        let upward = candidates
            .iter()
            .copied()
            .filter(|&candidate| {
                candidate >= current && candidate < next && candidate - current <= max_increase
            })
            .min();
        if let Some(weight) = upward {
            return weight;
        }

        let bar = self.bar().weight();
        candidates
            .into_iter()
            .filter(|&candidate| {
                candidate < current
                    && candidate < next
                    && (u64::from(candidate) * 2 >= u64::from(current) || candidate == bar)
            })
            .max()
            .unwrap_or(current)
    }

    /// Rewrites `warmups` (lightest first) so each one steps into the next,
    /// and the last into `working`, by adding plates only, without going
    /// past the following set.
    ///
    /// `working` itself is never changed. Positions that cannot be repaired
    /// keep their best value found.
    #[must_use]
    pub fn compute_linear_warmups(
        &self,
        warmups: &[u32],
        working: u32,
        max_increase_per_warmup: u32,
    ) -> Vec<u32> {
        if warmups.is_empty() {
            return Vec::new();
        }

        let mut weights: Vec<u32> = warmups.iter().copied().chain(iter::once(working)).collect();

        for pass in 1..=MAX_PASSES {
            let mut changed = false;

            for i in (0..weights.len() - 1).rev() {
                let current = weights[i];
                let next = weights[i + 1];
                if current <= next && self.is_additive(current, next) {
                    continue;
                }

                let prev = if i > 0 { weights[i - 1] } else { self.bar().weight() };
                let adjusted = self.repair_step(i, prev, current, next, max_increase_per_warmup);

                if adjusted != current {
                    trace!(
                        pass,
                        position = i,
                        current,
                        adjusted,
                        next,
                        "Repaired warm-up"
                    );
                    weights[i] = adjusted;
                    changed = true;
                }
            }

            if !changed {
                debug!(pass, "Warm-up progression settled");
                break;
            }
            if pass == MAX_PASSES {
                debug!(passes = MAX_PASSES, "Warm-up progression did not settle");
            }
        }

        weights.pop();
        weights
    }

    fn repair_step(
        &self,
        index: usize,
        prev: u32,
        current: u32,
        next: u32,
        max_increase: u32,
    ) -> u32 {
        let bar = self.bar().weight();

        let mut adjusted = if current > next {
            next
        } else {
            self.round_to_valid_progression(current, next, max_increase)
        };

        // Only the first warm-up may fall all the way back to the empty bar.
        if adjusted == current && index == 0 && self.is_additive(bar, next) {
            adjusted = bar;
        }

        let valid = self.is_additive(adjusted, next);

        if index > 0 && (adjusted <= prev || !valid) {
            if let Some(between) = self.lightest_between(prev, next) {
                return between;
            }
            // No room between the neighbours: settle for a tie or a step back.
            if next - current.min(next) <= max_increase {
                return next;
            }
            if self.is_additive(prev, next) {
                return prev;
            }
            if valid {
                return adjusted;
            }
            return current;
        }

        if adjusted < prev && self.is_additive(prev, next) {
            return prev;
        }

        adjusted
    }

    /// Lightest plate-additive predecessor of `next` strictly heavier than `prev`.
    fn lightest_between(&self, prev: u32, next: u32) -> Option<u32> {
        self.candidates(next)
            .into_iter()
            .find(|&candidate| candidate > prev && candidate < next)
    }
}

#[cfg(test)]
mod tests {
    use crate::{bar::Bar, gym::Gym, plate::Plate, units::pounds};

    fn lbs(weights: &[u32]) -> Vec<u32> {
        weights.iter().map(|w| pounds(*w)).collect()
    }

    #[test]
    fn leaves_valid_step_alone() {
        let gym = Gym::default();
        assert_eq!(
            gym.round_to_valid_progression(pounds(135), pounds(185), pounds(30)),
            pounds(135)
        );
    }

    #[test]
    fn rounds_up_onto_next_plates() {
        let gym = Gym::default();
        assert_eq!(
            gym.round_to_valid_progression(pounds(185), pounds(210), pounds(30)),
            pounds(205)
        );
    }

    #[test]
    fn falls_back_to_bar_when_nothing_above_fits() {
        let gym = Gym::default();
        assert_eq!(
            gym.round_to_valid_progression(pounds(85), pounds(135), pounds(20)),
            pounds(45)
        );
    }

    #[test]
    fn never_drops_more_than_half() {
        let gym = Gym::default();
        // 315 is 45 x 3 per side and nothing in 295..=305 is built from it;
        // 225 is the heaviest lighter option that keeps half the weight.
        assert_eq!(
            gym.round_to_valid_progression(pounds(295), pounds(315), pounds(10)),
            pounds(225)
        );
        // 125 onto 135: only 45 remains below, which is the bar.
        assert_eq!(
            gym.round_to_valid_progression(pounds(125), pounds(135), pounds(5)),
            pounds(45)
        );
    }

    #[test]
    fn keeps_current_when_search_is_too_large() {
        // Thirteen doubling plates, each loaded once at the target: more
        // combinations than the search allows.
        let plates = (0..13).map(|k| Plate::new(pounds(5 << k))).collect::<Vec<_>>();
        let gym = Gym::new(Bar::default(), &plates).unwrap();
        assert_eq!(
            gym.round_to_valid_progression(pounds(81_965), pounds(81_955), pounds(30)),
            pounds(81_965)
        );
    }

    #[test]
    fn respects_max_increase() {
        let gym = Gym::default();
        let result = gym.round_to_valid_progression(pounds(100), pounds(300), pounds(10));
        assert!(result <= pounds(110));
    }

    #[test]
    fn empty_warmups_stay_empty() {
        let gym = Gym::default();
        assert!(
            gym.compute_linear_warmups(&[], pounds(300), pounds(30))
                .is_empty()
        );
    }

    #[test]
    fn valid_sequence_is_unchanged() {
        let gym = Gym::default();
        let warmups = lbs(&[45, 135, 165, 175]);
        assert_eq!(
            gym.compute_linear_warmups(&warmups, pounds(180), pounds(30)),
            warmups
        );
    }

    #[test]
    fn repairs_plate_removal_before_working_set() {
        let gym = Gym::default();
        let result = gym.compute_linear_warmups(&lbs(&[85, 135, 185]), pounds(210), pounds(30));
        assert_eq!(result, lbs(&[45, 135, 205]));
    }

    #[test]
    fn repairs_heavy_squat_warmups() {
        let gym = Gym::default();
        let warmups = lbs(&[45, 135, 190, 255]);
        let result = gym.compute_linear_warmups(&warmups, pounds(320), pounds(80));
        assert_eq!(result, lbs(&[45, 135, 225, 315]));
    }

    #[test]
    fn clamps_overshoot_to_next_set() {
        let gym = Gym::default();
        assert_eq!(
            gym.compute_linear_warmups(&lbs(&[250]), pounds(210), pounds(30)),
            lbs(&[210])
        );
        assert_eq!(
            gym.compute_linear_warmups(&lbs(&[160, 140]), pounds(200), pounds(30)),
            lbs(&[140, 140])
        );
    }

    #[test]
    fn ties_with_next_set_when_nothing_fits_between() {
        let gym = Gym::default();
        // 115 (35 per side) cannot grow into 135 (45 per side) and nothing sits
        // strictly between the 45 bar and 135.
        let result = gym.compute_linear_warmups(&lbs(&[45, 115]), pounds(135), pounds(30));
        assert_eq!(result, lbs(&[45, 135]));
    }
}
