//! YAML configuration, read from `--config`, `$XDG_CONFIG_HOME/tbcalc/config.yaml`
//! or `~/.config/tbcalc/config.yaml`, in that order.

use std::{
    collections::BTreeMap,
    env,
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    bar::Bar,
    formatter::{WeightFormat, WeightUnit},
    gym::Gym,
    gym_error::GymError,
    plate::{DEFAULT_PLATES, Plate},
    units,
    week::WeekPercentages,
};

const CONFIG_DIR: &str = "tbcalc";
const CONFIG_FILE: &str = "config.yaml";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    pub weight_unit: WeightUnit,
    pub show_weight_decimals: bool,
}

impl FormattingConfig {
    #[must_use]
    pub fn weight_format(&self) -> WeightFormat {
        WeightFormat {
            unit: self.weight_unit,
            show_decimals: self.show_weight_decimals,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub standard_bar_weight: f64,
    pub body_weight: Option<f64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            standard_bar_weight: 45.0,
            body_weight: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// May contain `{date}`, replaced by the date in `date_format`.
    pub default_title: String,
    /// A `chrono` strftime pattern.
    pub date_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            default_title: "Tactical Barbell Max Strength: {date}".to_string(),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl OutputConfig {
    /// `title`, or the default title, with `{date}` expanded.
    #[must_use]
    pub fn title(&self, title: Option<&str>, date: NaiveDate) -> String {
        let template = title.unwrap_or(&self.default_title);
        if !template.contains("{date}") {
            return template.to_string();
        }
        template.replace("{date}", &self.format_date(date))
    }

    fn format_date(&self, date: NaiveDate) -> String {
        let mut formatted = String::new();
        if write!(formatted, "{}", date.format(&self.date_format)).is_ok() {
            return formatted;
        }

        warn!(
            date_format = %self.date_format,
            "Invalid date format, using {DATE_FORMAT}"
        );
        date.format(DATE_FORMAT).to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub formatting: FormattingConfig,
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
    /// Week number to percentage, overriding only the weeks listed.
    pub week_percentages: BTreeMap<u8, u32>,
    pub available_plates: Vec<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            formatting: FormattingConfig::default(),
            defaults: DefaultsConfig::default(),
            output: OutputConfig::default(),
            week_percentages: BTreeMap::new(),
            available_plates: DEFAULT_PLATES
                .iter()
                .map(|w| units::to_pounds(*w))
                .collect(),
        }
    }
}

impl Config {
    /// The configured plates on a barbell of `bar_weight` pounds, or the
    /// configured standard bar when `None`.
    ///
    /// # Errors
    /// If the bar or any plate weight is invalid, or the plates do not form a
    /// valid inventory.
    ///
    pub fn gym(&self, bar_weight: Option<f64>) -> Result<Gym, GymError> {
        let bar_weight = bar_weight.unwrap_or(self.defaults.standard_bar_weight);
        let bar = Bar::barbell(units::from_pounds(bar_weight)?);
        let plates = Plate::from_pounds(&self.available_plates)?;
        Gym::new(bar, &plates)
    }

    ///
    /// # Errors
    /// If a key is not a week from 1 to 6.
    ///
    pub fn percentages(&self) -> Result<WeekPercentages, GymError> {
        WeekPercentages::from_map(&self.week_percentages)
    }

    ///
    /// # Errors
    /// If the configured body weight is negative or not a number.
    ///
    pub fn body_weight(&self) -> Result<Option<u32>, GymError> {
        self.defaults.body_weight.map(units::from_pounds).transpose()
    }
}

/// Files to try, most specific first.
fn candidate_paths(
    explicit: Option<&Path>,
    config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let user_dir = config_home
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home.map(|home| home.join(".config")));

    user_dir
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .into_iter()
        .collect()
}

fn read_config(path: &Path) -> anyhow::Result<Option<Config>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(None);
    }

    let config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(config))
}

/// Loads the first readable config file, falling back to defaults.
///
/// Files that fail to load are skipped with a warning.
#[must_use]
pub fn load_config(explicit: Option<&Path>) -> Config {
    let paths = candidate_paths(
        explicit,
        env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        dirs::home_dir(),
    );

    for path in paths {
        if !path.exists() {
            if explicit.is_some() {
                warn!(path = %path.display(), "Config file not found, using defaults");
            }
            continue;
        }

        match read_config(&path) {
            Ok(Some(config)) => {
                debug!(path = %path.display(), "Loaded config");
                return config;
            }
            Ok(None) => debug!(path = %path.display(), "Config file is empty"),
            Err(e) => warn!("{e:#}, using defaults"),
        }
    }

    Config::default()
}
