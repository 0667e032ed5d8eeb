mod common;

use common::{approach, output_path, sample_database};
use neo_approach::{write_json, NeoError, SerializedApproach};
use serde_json::{json, Value};

#[test]
fn test_json_round_trip() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "approaches.json");

    write_json(db.approaches(), &db, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<SerializedApproach> = serde_json::from_str(&content).unwrap();
    let expected: Vec<SerializedApproach> = db
        .approaches()
        .map(|a| a.serialize(&db).unwrap())
        .collect();

    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed, expected);
}

#[test]
fn test_json_schema() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "schema.json");

    write_json(db.approaches(), &db, &path).unwrap();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "datetime_utc": "2020-01-01 00:00",
                "distance_au": 0.425,
                "velocity_km_s": 5.12,
                "neo": {
                    "designation": "433",
                    "name": "Eros",
                    "diameter_km": 16.84,
                    "potentially_hazardous": false
                }
            },
            {
                "datetime_utc": "2020-01-03 10:45",
                "distance_au": 0.0123,
                "velocity_km_s": 7.891,
                "neo": {
                    "designation": "2020 AB",
                    "name": null,
                    "diameter_km": null,
                    "potentially_hazardous": false
                }
            },
            {
                "datetime_utc": "2029-04-13 21:46",
                "distance_au": 0.000254,
                "velocity_km_s": 7.42,
                "neo": {
                    "designation": "99942",
                    "name": "Apophis",
                    "diameter_km": 0.37,
                    "potentially_hazardous": true
                }
            }
        ])
    );
}

#[test]
fn test_json_two_space_indent() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "indent.json");

    write_json(db.approaches().take(1), &db, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let expected = r#"[
  {
    "datetime_utc": "2020-01-01 00:00",
    "distance_au": 0.425,
    "velocity_km_s": 5.12,
    "neo": {
      "designation": "433",
      "name": "Eros",
      "diameter_km": 16.84,
      "potentially_hazardous": false
    }
  }
]"#;
    assert_eq!(content, expected);
}

#[test]
fn test_json_empty_stream() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "empty.json");

    write_json(std::iter::empty(), &db, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_json_unlinked_approach_creates_no_file() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "never.json");

    let orphan = approach("1036", "2020-Feb-02 02:02", "0.3", "12.5");
    let err = write_json(std::iter::once(&orphan), &db, &path).unwrap_err();

    assert_eq!(err, NeoError::UnlinkedApproach("1036".into()));
    assert!(!path.exists());
}

#[test]
fn test_json_rejects_registry_with_other_order() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "reordered.json");

    let mut reordered = db.neos().to_vec();
    reordered.reverse();

    let err = write_json(db.approaches(), &reordered, &path).unwrap_err();
    assert_eq!(
        err,
        NeoError::MismatchedLink {
            approach: "433".into(),
            neo: "99942".into()
        }
    );
    assert!(!path.exists());
}

#[test]
fn test_json_unwritable_destination() {
    let db = sample_database();
    let dir = tempfile::tempdir().unwrap();
    let path = output_path(&dir, "missing/dir/out.json");

    let err = write_json(db.approaches(), &db, &path).unwrap_err();
    assert!(err.is_resource_error());
    assert!(matches!(err, NeoError::IoError(_)));
    assert!(!path.exists());
}
