// tests/definition_loading.rs
use glam::Vec2;
use std::io::Write;
use symbios_turtle::{ActionKind, Definition, LSystemError, NullSink, load_lsystem};

const PLANT: &str = r#"{
    "angle": 25,
    "axiom": "X",
    "rules": { "X": "F+[[X]-X]-F[-FX]+X", "F": "FF" },
    "actions": { "X": "noop", "Y": "draw" },
    "draw": { "start_point": [1, 2], "start_heading": 90, "default_order": 3, "default_unit": 2 }
}"#;

#[test]
fn test_full_definition_builds() {
    let lsystem = Definition::from_json_str(PLANT).unwrap().build().unwrap();

    assert_eq!(lsystem.defaults().order, 3);
    assert_eq!(lsystem.defaults().unit, 2.0);
    assert_eq!(lsystem.interpreter().config().angle, 25.0);
    assert_eq!(lsystem.interpreter().config().start_position, Vec2::new(1.0, 2.0));
    assert_eq!(lsystem.interpreter().action('Y'), ActionKind::DrawForward);
    assert_eq!(lsystem.grammar().rule('F'), Some(&['F', 'F'][..]));

    let drawing = lsystem.render(1, 1.0).unwrap();
    // F+[[X]-X]-F[-FX]+X draws three times, starting straight up.
    assert_eq!(drawing.len(), 3);
    assert!(drawing.segments[0].end.abs_diff_eq(Vec2::new(1.0, 3.0), 1e-4));
}

#[test]
fn test_minimal_definition_uses_defaults() {
    let json = r#"{ "angle": 60, "axiom": "F--F--F", "rules": { "F": "F+F--F+F" } }"#;
    let lsystem = Definition::from_json_str(json).unwrap().build().unwrap();

    assert_eq!(lsystem.defaults().order, 5);
    assert_eq!(lsystem.defaults().unit, 5.0);
    let summary = lsystem.execute("F--F--F", 1, 1.0, NullSink).unwrap();
    assert_eq!(summary.segments, 12);
}

#[test]
fn test_missing_fields_are_reported() {
    let cases = [
        (r#"{ "angle": 60, "axiom": "F" }"#, "rules"),
        (r#"{ "angle": 60, "rules": {} }"#, "axiom"),
        (r#"{ "axiom": "F", "rules": {} }"#, "angle"),
    ];
    for (json, field) in cases {
        let err = Definition::from_json_str(json).unwrap().build().unwrap_err();
        assert!(
            matches!(err, LSystemError::MissingField(f) if f == field),
            "expected missing {field}, got {err}"
        );
    }
}

#[test]
fn test_unknown_action_in_file_fails_fast() {
    let json = r#"{ "angle": 60, "axiom": "F", "rules": {}, "actions": { "F": "spin" } }"#;
    let err = Definition::from_json_str(json).unwrap().build().unwrap_err();
    assert!(matches!(err, LSystemError::UnknownActionKind { symbol: 'F', .. }));
}

#[test]
fn test_multi_char_keys_rejected() {
    let json = r#"{ "angle": 60, "axiom": "F", "rules": { "FF": "F" } }"#;
    let err = Definition::from_json_str(json).unwrap().build().unwrap_err();
    assert!(matches!(err, LSystemError::InvalidSymbol { .. }));
}

#[test]
fn test_malformed_json() {
    let err = Definition::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LSystemError::Json(_)));
}

#[test]
fn test_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PLANT.as_bytes()).unwrap();

    let lsystem = load_lsystem(file.path()).unwrap();
    let summary = lsystem.demo(NullSink).unwrap();
    assert_eq!(summary.unrestored, 0);
    assert!(summary.segments > 0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_lsystem(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LSystemError::Io(_)));
}
