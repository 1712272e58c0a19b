use super::*;
use crate::config::write_default_config;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(config::CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("write test config");
    path
}

fn georgia_verdana() -> Configuration {
    Configuration {
        default_font1: "Georgia".into(),
        default_font2: "Verdana".into(),
        font_size1: 14.0,
        font_size2: 9.0,
    }
}

fn assert_validation_error(path: &Path) -> String {
    match load_config_from(path) {
        Err(FontCompareError::ConfigValidation(message)) => message,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn missing_config_generates_default_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(config::CONFIG_FILE_NAME);

    let err = load_config_from(&path).expect_err("missing config must not load");

    assert!(matches!(err, FontCompareError::ConfigGenerated { ref path } if path.ends_with("config.json")));
    assert_eq!(
        err.to_string(),
        "config.json is missing! A clean config.json has been generated."
    );

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "default_font1": "Arial",
            "default_font2": "Calibri",
            "font_size1": 11,
            "font_size2": 11,
        })
    );
}

#[test]
fn generated_default_uses_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated.json");

    write_default_config(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "{\n    \"default_font1\": \"Arial\",\n    \"default_font2\": \"Calibri\",\n    \"font_size1\": 11,\n    \"font_size2\": 11\n}"
    );
}

#[test]
fn generated_default_is_rejected_only_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(config::CONFIG_FILE_NAME);

    assert!(load_config_from(&path).is_err());
    let config = load_config_from(&path).expect("generated file should validate");

    assert_eq!(config, Configuration::default());
}

#[test]
fn missing_key_is_rejected_without_rewrite() {
    let dir = TempDir::new().unwrap();
    let contents = r#"{"default_font1": "Arial", "default_font2": "Calibri", "font_size1": 11}"#;
    let path = write_config(&dir, contents);

    let message = assert_validation_error(&path);

    assert_eq!(message, "'font_size2' is a required property");
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn string_font_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"default_font1": "Arial", "default_font2": "Calibri", "font_size1": "11", "font_size2": 11}"#,
    );

    let message = assert_validation_error(&path);

    assert_eq!(message, r#""11" is not of type 'number'"#);
}

#[test]
fn numeric_font_name_is_rejected() {
    let raw = json!({
        "default_font1": 12,
        "default_font2": "Calibri",
        "font_size1": 11,
        "font_size2": 11,
    });

    let err = validate_config(&raw).expect_err("number is not a font name");

    assert_eq!(err.to_string(), "12 is not of type 'string'");
}

#[test]
fn boolean_is_not_a_number() {
    let raw = json!({
        "default_font1": "Arial",
        "default_font2": "Calibri",
        "font_size1": 11,
        "font_size2": true,
    });

    assert!(validate_config(&raw).is_err());
}

#[test]
fn type_errors_are_reported_before_missing_keys() {
    let raw = json!({ "font_size1": "big" });

    let err = validate_config(&raw).unwrap_err();

    assert_eq!(err.to_string(), r#""big" is not of type 'number'"#);
}

#[test]
fn non_object_root_is_rejected() {
    let err = validate_config(&json!(["Arial", "Calibri"])).unwrap_err();

    assert!(err.to_string().ends_with("is not of type 'object'"));
}

#[test]
fn valid_config_is_returned_unchanged() {
    let dir = TempDir::new().unwrap();
    let contents =
        r#"{"default_font1":"Georgia","default_font2":"Verdana","font_size1":14,"font_size2":9}"#;
    let path = write_config(&dir, contents);

    let config = load_config_from(&path).expect("valid config should load");

    assert_eq!(config, georgia_verdana());
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn extra_keys_and_fractional_sizes_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"default_font1":"Georgia","default_font2":"Verdana","font_size1":10.5,"font_size2":9,"theme":"dark"}"#,
    );

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.font_size1, 10.5);
    assert_eq!(config.font_name(Side::Right), "Verdana");
}

#[test]
fn unparseable_config_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    let err = load_config_from(&path).unwrap_err();

    assert!(matches!(err, FontCompareError::ConfigParse { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn sample_text_covers_accented_latin() {
    assert!(SAMPLE_TEXT.starts_with("The quick brown fox jumps over the lazy dog.\n"));
    assert!(SAMPLE_TEXT.contains("[\\]^_`{|}~"));
    assert!(SAMPLE_TEXT.ends_with("ïð"));
    assert!(SAMPLE_TEXT.contains('À'));
    assert!(!SAMPLE_TEXT.contains('×'));
}

#[test]
fn initial_previews_use_configured_fonts_and_sizes() {
    let state = ComparisonState::from_config(&georgia_verdana());

    assert_eq!(state.sample_text(), SAMPLE_TEXT);
    assert_eq!(state.preview(Side::Left).font(), &FontSpec::new("Georgia", 14.0));
    assert_eq!(state.preview(Side::Right).font(), &FontSpec::new("Verdana", 9.0));
    for side in Side::ALL {
        assert_eq!(state.preview(side).text(), SAMPLE_TEXT);
    }
}

#[test]
fn source_edit_echoes_into_both_previews() {
    let mut state = ComparisonState::from_config(&georgia_verdana());

    for input in ["", "x", "multi\nline\n", "ÀÉÎ õ ü", "  trailing spaces  "] {
        state.set_sample_text(input.to_string());

        assert_eq!(state.sample_text(), input);
        assert_eq!(state.preview(Side::Left).text(), input);
        assert_eq!(state.preview(Side::Right).text(), input);
    }
}

#[test]
fn source_edit_rerenders_at_fixed_size_with_current_fonts() {
    let mut state = ComparisonState::from_config(&georgia_verdana());
    state.set_font_name(Side::Right, "Courier New".into());

    state.set_sample_text("abc".into());

    assert_eq!(
        state.preview(Side::Left).font(),
        &FontSpec::new("Georgia", RERENDER_POINT_SIZE)
    );
    assert_eq!(
        state.preview(Side::Right).font(),
        &FontSpec::new("Courier New", RERENDER_POINT_SIZE)
    );
}

#[test]
fn font_edit_only_touches_its_own_side() {
    for (side, other) in [(Side::Left, Side::Right), (Side::Right, Side::Left)] {
        let mut state = ComparisonState::from_config(&georgia_verdana());
        let untouched = state.preview(other).clone();

        state.set_font_name(side, "Times New Roman".into());

        assert_eq!(state.font_name(side), "Times New Roman");
        assert_eq!(state.preview(side).font().family, "Times New Roman");
        assert_eq!(state.preview(side).font().size, RERENDER_POINT_SIZE);
        assert_eq!(state.preview(other), &untouched);
    }
}

#[test]
fn unknown_font_name_is_accepted() {
    let mut state = ComparisonState::from_config(&Configuration::default());

    state.set_font_name(Side::Left, "No Such Font 123".into());
    state.set_font_name(Side::Right, String::new());

    assert_eq!(state.preview(Side::Left).font().family, "No Such Font 123");
    assert_eq!(state.preview(Side::Right).font().family, "");
    assert_eq!(state.preview(Side::Right).text(), SAMPLE_TEXT);
}

#[test]
fn font_edit_keeps_current_sample_text() {
    let mut state = ComparisonState::from_config(&Configuration::default());
    state.set_sample_text("edited".into());

    state.set_font_name(Side::Left, "Georgia".into());

    assert_eq!(state.preview(Side::Left).text(), "edited");
    assert_eq!(state.sample_text(), "edited");
}

#[test]
fn zero_configured_size_uses_default_points() {
    let config = Configuration {
        font_size1: 0.0,
        ..georgia_verdana()
    };

    let state = ComparisonState::from_config(&config);

    assert_eq!(state.preview(Side::Left).font().size, DEFAULT_POINT_SIZE);
    assert_eq!(state.preview(Side::Right).font().size, 9.0);
    assert_eq!(FontSpec::configured("A", 1e-60).size, DEFAULT_POINT_SIZE);
}

#[test]
fn negative_configured_size_is_pixels() {
    let config = Configuration {
        font_size1: -12.0,
        ..georgia_verdana()
    };

    let state = ComparisonState::from_config(&config);

    assert_eq!(state.preview(Side::Left).font().size, 9.0);
    assert!(state.preview(Side::Left).font().size > 0.0);
}

#[test]
fn zero_and_negative_sizes_pass_validation_and_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"default_font1":"A","default_font2":"B","font_size1":0,"font_size2":-16}"#,
    );

    let config = load_config_from(&path).unwrap();
    let state = ComparisonState::from_config(&config);

    for side in Side::ALL {
        assert!(state.preview(side).font().size > 0.0);
    }
    assert_eq!(state.preview(Side::Right).font().size, 12.0);
}
