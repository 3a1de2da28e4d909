use crate::date::{CalendarDate, DateRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// A committed picker value. "Nothing selected" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PickerValue {
    Single(CalendarDate),
    Range(DateRange),
}

impl PickerValue {
    pub fn as_single(&self) -> Option<CalendarDate> {
        match self {
            PickerValue::Single(date) => Some(*date),
            PickerValue::Range(_) => None,
        }
    }

    pub fn as_range(&self) -> Option<&DateRange> {
        match self {
            PickerValue::Range(range) => Some(range),
            PickerValue::Single(_) => None,
        }
    }

    /// First day of the value, used to bring it into view.
    pub fn anchor(&self) -> CalendarDate {
        match self {
            PickerValue::Single(date) => *date,
            PickerValue::Range(range) => range.start(),
        }
    }
}

impl From<CalendarDate> for PickerValue {
    fn from(date: CalendarDate) -> Self {
        PickerValue::Single(date)
    }
}

impl From<DateRange> for PickerValue {
    fn from(range: DateRange) -> Self {
        PickerValue::Range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_serializes_as_plain_timestamp() {
        let value = PickerValue::Single(CalendarDate::from_ymd(2024, 6, 5).unwrap());
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            "\"2024-06-05T00:00:00\""
        );
    }

    #[test]
    fn mode_deserializes_lowercase() {
        let mode: SelectionMode = serde_yaml::from_str("range").unwrap();
        assert_eq!(mode, SelectionMode::Range);
    }
}
