use super::*;
use crate::color::Rgb;
use std::path::PathBuf;

fn temp_json(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("swatchspace-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

const SAMPLE_JSON: &str = r#"[
  { "file": "alabama.png", "r": 0.874512, "g": 0.801234, "b": 0.812001 },
  { "file": "alaska.png", "r": 0.102, "g": 0.2, "b": 0.55 }
]"#;

#[test]
fn test_parse_keeps_order_and_values() {
    let samples = parse_samples(SAMPLE_JSON).unwrap();

    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].id, "alabama.png");
    assert_eq!(samples[1].id, "alaska.png");
    assert_eq!(samples[1].color, Rgb::new(0.102, 0.2, 0.55));
}

#[test]
fn test_parse_empty_array() {
    assert!(parse_samples("[]").unwrap().is_empty());
}

#[test]
fn test_parse_ignores_extra_fields() {
    let json = r#"[{ "file": "x.png", "r": 0, "g": 1, "b": 0.5, "count": 12 }]"#;
    let samples = parse_samples(json).unwrap();
    assert_eq!(samples[0].color, Rgb::new(0.0, 1.0, 0.5));
}

#[test]
fn test_parse_missing_channel_fails() {
    let json = r#"[{ "file": "x.png", "r": 0.1, "g": 0.2 }]"#;
    assert!(matches!(parse_samples(json), Err(LoadError::Parse(_))));
}

#[test]
fn test_parse_garbage_fails() {
    assert!(matches!(parse_samples("<html>"), Err(LoadError::Parse(_))));
}

#[test]
fn test_non_finite_channel_rejected() {
    let record = AvgColorRecord {
        file: "bad.png".to_string(),
        r: 0.1,
        g: f64::NAN,
        b: 0.3,
    };
    match ColorSample::try_from(record) {
        Err(LoadError::InvalidChannel { file, channel, .. }) => {
            assert_eq!(file, "bad.png");
            assert_eq!(channel, "g");
        }
        other => panic!("expected InvalidChannel, got {:?}", other),
    }
}

#[test]
fn test_record_from_sample() {
    let sample = ColorSample::new("ohio.png", 0.1, 0.2, 0.3);
    let record = AvgColorRecord::from(&sample);
    assert_eq!(record.file, "ohio.png");
    assert_eq!((record.r, record.g, record.b), (0.1, 0.2, 0.3));
}

#[test]
fn test_load_from_file() {
    let path = temp_json(SAMPLE_JSON);
    let samples = load_samples(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(samples.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join(format!("swatchspace-missing-{}.json", uuid::Uuid::new_v4()));
    let err = load_samples(&path).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_thumbnail_path() {
    assert_eq!(
        thumbnail_path(DEFAULT_THUMBNAIL_DIR, "utah.png"),
        "outputs/thumbnails/utah.png"
    );
    assert_eq!(thumbnail_path("thumbs/", "utah.png"), "thumbs/utah.png");
    assert_eq!(thumbnail_path("", "utah.png"), "utah.png");
}
