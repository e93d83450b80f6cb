use crate::{gym::Gym, units::pounds};

/// How far a linear-progression patch may raise a clutter-optimized warm-up.
const LINEAR_PATCH_LIMIT: u32 = pounds(20);

/// Tuning for [`Gym::optimize_single_warmup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarmupOptions {
    /// Largest per-side round-up accepted to replace small plates with one.
    pub threshold: u32,
    /// Weight of the set that follows this warm-up, if any.
    pub next_total_weight: Option<u32>,
    /// Plates at least this heavy are worth pre-loading for the next set.
    pub big_plate_min: u32,
    /// How far below a big plate (per side) this warm-up may be and still jump to it.
    pub big_plate_slack: u32,
}

impl WarmupOptions {
    #[must_use]
    pub fn with_next(self, next_total_weight: u32) -> Self {
        WarmupOptions {
            next_total_weight: Some(next_total_weight),
            ..self
        }
    }
}

impl Default for WarmupOptions {
    fn default() -> Self {
        WarmupOptions {
            threshold: 2500,
            next_total_weight: None,
            big_plate_min: pounds(45),
            big_plate_slack: pounds(10),
        }
    }
}

impl Gym {
    /// Tidies a single warm-up weight.
    ///
    /// In order: jump up to a big plate the next set needs when close enough,
    /// otherwise swap a pile of small plates for one slightly heavier plate,
    /// then make sure the next set is reached by adding plates only.
    #[must_use]
    pub fn optimize_single_warmup(&self, total_weight: u32, options: &WarmupOptions) -> u32 {
        let bar = *self.bar();
        if total_weight <= bar.weight() {
            return total_weight;
        }

        let per_side = bar.per_side(total_weight);
        let next = options
            .next_total_weight
            .filter(|next| *next > bar.weight());

        if let Some(next) = next {
            if let Some(big) = self.big_plate_for(next, options.big_plate_min) {
                if per_side < big && big - per_side <= options.big_plate_slack {
                    return self.round_to_valid_progression(bar.total(big), next, 0);
                }
            }
        }

        let mut optimized = self.declutter(total_weight, options.threshold);

        if let Some(next) = options.next_total_weight {
            if next > optimized {
                let adjusted = self.round_to_valid_progression(optimized, next, LINEAR_PATCH_LIMIT);
                if adjusted != optimized && self.is_additive(adjusted, next) {
                    optimized = adjusted;
                }
            }
        }

        optimized
    }

    /// Heaviest plate of at least `min` that fits within one side of `next`.
    fn big_plate_for(&self, next: u32, min: u32) -> Option<u32> {
        let next_per_side = self.bar().per_side(next);
        self.plates()
            .iter()
            .map(|plate| plate.weight())
            .filter(|weight| *weight >= min && *weight <= next_per_side)
            .max()
    }

    /// Replaces whatever is left after the largest plates with a single plate
    /// when that costs at most `threshold` extra per side.
    fn declutter(&self, total_weight: u32, threshold: u32) -> u32 {
        let bar = *self.bar();
        let per_side = bar.per_side(total_weight);
        let Some(largest) = self.plates().first().map(|plate| plate.weight()) else {
            return total_weight;
        };

        let base = per_side / largest * largest;
        let remainder = per_side - base;
        if remainder == 0 {
            return total_weight;
        }

        let replacement = self
            .plates()
            .iter()
            .rev()
            .map(|plate| plate.weight())
            .find(|weight| *weight >= remainder);

        match replacement {
            Some(plate) if plate - remainder <= threshold => bar.total(base + plate),
            _ => total_weight,
        }
    }
}
