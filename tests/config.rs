use std::io::Write;

use andhera_date_input::config::{ConfigError, PickerConfig};
use andhera_date_input::{DateInputEngine, PickerValue, SelectionMode, ValidationError, codec};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config_from_file() {
    let file = write_config(
        "label: Stay\n\
         mode: range\n\
         min_date: 01/06/2024\n\
         max_date: 31/12/2024\n\
         disable_past_dates: true\n\
         validate_range: false\n\
         today: 15/06/2024\n\
         value: 20/06/2024 - 25/06/2024\n",
    );

    let config = PickerConfig::load(file.path()).unwrap();
    assert_eq!(config.label, "Stay");
    assert_eq!(config.mode, SelectionMode::Range);

    let policy = config.policy().unwrap();
    assert_eq!(policy.mode, SelectionMode::Range);
    assert_eq!(policy.bounds.min_date, Some(ymd(2024, 6, 1)));
    assert_eq!(policy.bounds.max_date, Some(ymd(2024, 12, 31)));
    assert!(policy.bounds.disable_past_dates);
    assert!(!policy.validate_range);
    assert_eq!(config.reference_date().unwrap(), Some(ymd(2024, 6, 15)));

    let value = config
        .value
        .as_deref()
        .and_then(|text| codec::parse_value(text, config.mode));
    assert!(matches!(value, Some(PickerValue::Range(_))));
}

#[test]
fn configured_policy_drives_the_engine() {
    let config = PickerConfig::from_yaml_str(
        "mode: single\nmax_date: 30/06/2024\ntoday: 15/06/2024\n",
    )
    .unwrap();
    let mut engine = DateInputEngine::new(
        config.policy().unwrap(),
        config.reference_date().unwrap().unwrap(),
    );

    engine.handle_text("01/07/2024");
    assert_eq!(
        engine.error(),
        Some(&ValidationError::OutOfBounds {
            date: ymd(2024, 7, 1)
        })
    );

    engine.handle_text("30/06/2024");
    assert!(engine.committed().is_some());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = PickerConfig::from_yaml_str("mode: single\ncolour: blue\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(PickerConfig::from_yaml_str("mode: week\n").is_err());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = PickerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}
