use std::fmt::Display;

use crate::{bar_kind::BarKind, units};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    pub weight: u32,
    pub kind: BarKind,
}

impl Bar {
    #[must_use]
    pub fn new(weight: u32, kind: BarKind) -> Self {
        Bar { weight, kind }
    }

    #[must_use]
    pub fn barbell(weight: u32) -> Self {
        Bar::new(weight, BarKind::Barbell)
    }

    #[must_use]
    pub fn belt() -> Self {
        Bar::new(0, BarKind::Belt)
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn kind(&self) -> BarKind {
        self.kind
    }

    /// Load hanging from one side for a total weight; zero at or below the bar.
    #[must_use]
    pub fn per_side(&self, total: u32) -> u32 {
        total.saturating_sub(self.weight) / self.kind.sides()
    }

    /// Total weight with `per_side` loaded on every side.
    #[must_use]
    pub fn total(&self, per_side: u32) -> u32 {
        self.weight + per_side * self.kind.sides()
    }
}

impl Default for Bar {
    fn default() -> Self {
        Bar::barbell(units::pounds(45))
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, units::display(self.weight))
    }
}
