use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::policy::{BoundsPolicy, PickerPolicy};
use crate::core::value::SelectionMode;
use crate::date::codec;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] serde_yaml::Error),

    #[error("{field} must be a real date in DD/MM/YYYY, got {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("min_date {min} is after max_date {max}")]
    EmptyBounds { min: String, max: String },
}

/// Picker settings as written in a YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerConfig {
    /// Field label shown next to the input box.
    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default)]
    pub mode: SelectionMode,

    /// Earliest selectable date, `DD/MM/YYYY`.
    #[serde(default)]
    pub min_date: Option<String>,

    /// Latest selectable date, `DD/MM/YYYY`.
    #[serde(default)]
    pub max_date: Option<String>,

    #[serde(default)]
    pub disable_past_dates: bool,

    #[serde(default = "default_true")]
    pub validate_range: bool,

    /// Pins "today" instead of reading the clock.
    #[serde(default)]
    pub today: Option<String>,

    /// Initial value, `DD/MM/YYYY` or `DD/MM/YYYY - DD/MM/YYYY`.
    #[serde(default)]
    pub value: Option<String>,
}

fn default_label() -> String {
    "Date".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            mode: SelectionMode::default(),
            min_date: None,
            max_date: None,
            disable_past_dates: false,
            validate_range: true,
            today: None,
            value: None,
        }
    }
}

impl PickerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn policy(&self) -> Result<PickerPolicy, ConfigError> {
        let min_date = parse_field("min_date", self.min_date.as_deref())?;
        let max_date = parse_field("max_date", self.max_date.as_deref())?;
        if let (Some(min), Some(max)) = (min_date, max_date)
            && min > max
        {
            return Err(ConfigError::EmptyBounds {
                min: codec::format_naive(min),
                max: codec::format_naive(max),
            });
        }

        Ok(PickerPolicy {
            mode: self.mode,
            bounds: BoundsPolicy {
                min_date,
                max_date,
                disable_past_dates: self.disable_past_dates,
            },
            validate_range: self.validate_range,
        })
    }

    pub fn reference_date(&self) -> Result<Option<NaiveDate>, ConfigError> {
        parse_field("today", self.today.as_deref())
    }
}

fn parse_field(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, ConfigError> {
    value
        .map(|text| {
            codec::parse_naive(text).ok_or_else(|| ConfigError::InvalidDate {
                field,
                value: text.to_string(),
            })
        })
        .transpose()
}
