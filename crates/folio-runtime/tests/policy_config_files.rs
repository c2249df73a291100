#![forbid(unsafe_code)]

//! File-backed loading of [`RevealConfig`].

use std::io::Write;

use folio_runtime::{RevealConfig, RevealConfigError, RevealFallback, StaggerMode};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
        fallback = "keep_hidden"

        [observer]
        threshold = 0.25

        [observer.root_margin]
        bottom = -50.0

        [stagger]
        mode = "linear"
        step_ms = 80

        [[parallax.layers]]
        x = 0.5
        y = -0.5
        "#,
    );
    let config = RevealConfig::from_toml_file(file.path()).expect("valid config");
    assert_eq!(config.observer.threshold, 0.25);
    assert_eq!(config.observer.root_margin.bottom, -50.0);
    assert_eq!(config.observer.root_margin.top, 0.0);
    assert_eq!(config.stagger.mode, StaggerMode::Linear);
    assert_eq!(config.stagger.step_ms, 80);
    assert_eq!(config.parallax.layers.len(), 1);
    assert_eq!(config.fallback, RevealFallback::KeepHidden);
    assert_eq!(config.transition.duration_ms, 800, "untouched sections keep defaults");
}

#[test]
fn loads_json_file() {
    let original = RevealConfig {
        fallback: RevealFallback::KeepHidden,
        ..RevealConfig::default()
    };
    let file = write_temp(".json", &original.to_json().expect("encode"));
    assert_eq!(RevealConfig::from_json_file(file.path()).expect("decode"), original);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = RevealConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RevealConfigError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = write_temp(".toml", "[observer\nthreshold = ");
    let err = RevealConfig::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, RevealConfigError::Toml(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let file = write_temp(".json", "{ \"observer\": ");
    let err = RevealConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, RevealConfigError::Json(_)));
}

#[test]
fn out_of_range_values_fail_validation() {
    let file = write_temp(".json", r#"{ "observer": { "threshold": 2.0 } }"#);
    match RevealConfig::from_json_file(file.path()) {
        Err(RevealConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("observer.threshold")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn non_finite_easing_fails_validation() {
    let file = write_temp(
        ".toml",
        "[transition.easing]\nx1 = 0.16\ny1 = nan\nx2 = 0.3\ny2 = inf\n",
    );
    match RevealConfig::from_toml_file(file.path()) {
        Err(RevealConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("y1/y2 must be finite")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
