//! Plain-text and Markdown rendering of headings, list items and weights.

use serde::Deserialize;

use crate::units;

pub trait Formatter {
    fn heading(&self, text: &str, level: u8) -> String;
    fn list_item(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn horizontal_rule(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainFormatter {
    pub bullet: String,
}

impl Default for PlainFormatter {
    fn default() -> Self {
        PlainFormatter {
            bullet: "• ".to_string(),
        }
    }
}

impl Formatter for PlainFormatter {
    fn heading(&self, text: &str, _level: u8) -> String {
        text.to_string()
    }

    fn list_item(&self, text: &str) -> String {
        if text.is_empty() {
            String::new()
        } else {
            format!("{}{text}", self.bullet)
        }
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn horizontal_rule(&self) -> String {
        "-".repeat(10)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn heading(&self, text: &str, level: u8) -> String {
        let level = usize::from(level.clamp(1, 6));
        format!("{} {text}", "#".repeat(level))
    }

    fn list_item(&self, text: &str) -> String {
        format!("- {text}")
    }

    fn bold(&self, text: &str) -> String {
        format!("**{text}**")
    }

    fn horizontal_rule(&self) -> String {
        "---".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// `280#`
    PoundsSign,
    /// `280 lbs`
    #[default]
    Lbs,
    /// `280 pounds`
    Pounds,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightFormat {
    pub unit: WeightUnit,
    pub show_decimals: bool,
}

impl WeightFormat {
    #[must_use]
    pub fn format_weight(&self, weight: u32) -> String {
        let whole = weight % units::SCALE == 0;
        let number = if whole && !self.show_decimals {
            (weight / units::SCALE).to_string()
        } else if whole {
            format!("{:.1}", units::to_pounds(weight))
        } else {
            units::display(weight)
        };

        match self.unit {
            WeightUnit::PoundsSign => format!("{number}#"),
            WeightUnit::Lbs => format!("{number} lbs"),
            WeightUnit::Pounds => format!("{number} pounds"),
        }
    }
}
