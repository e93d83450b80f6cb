use std::fmt::Display;

/// How plates hang off the implement.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum BarKind {
    /// Plates are loaded in pairs, one per sleeve, on top of the bar weight.
    Barbell,
    /// Plates hang from a dip belt; the whole load is one stack.
    Belt,
}

impl BarKind {
    #[must_use]
    pub fn sides(&self) -> u32 {
        match self {
            BarKind::Barbell => 2,
            BarKind::Belt => 1,
        }
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarKind::Barbell => write!(f, "Barbell"),
            BarKind::Belt => write!(f, "Belt"),
        }
    }
}
