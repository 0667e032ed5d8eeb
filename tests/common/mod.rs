#![allow(dead_code)]

use camino::Utf8PathBuf;
use neo_approach::{ApproachRecord, CloseApproach, NearEarthObject, NeoDatabase, NeoRecord};
use tempfile::TempDir;

pub fn neo(record: NeoRecord) -> NearEarthObject {
    NearEarthObject::from_record(record).unwrap()
}

pub fn approach(designation: &str, time: &str, distance: &str, velocity: &str) -> CloseApproach {
    CloseApproach::from_record(ApproachRecord::new(designation, time, distance, velocity)).unwrap()
}

/// Three NEOs (named, unnamed with unknown diameter, hazardous) with one approach each.
pub fn sample_database() -> NeoDatabase {
    let neos = vec![
        neo(NeoRecord::new("433")
            .with_name("Eros")
            .with_diameter("16.84")
            .with_hazardous("N")),
        neo(NeoRecord::new("2020 AB").with_name("").with_diameter("").with_hazardous("N")),
        neo(NeoRecord::new("99942")
            .with_name("Apophis")
            .with_diameter("0.37")
            .with_hazardous("Y")),
    ];
    let approaches = vec![
        approach("433", "2020-Jan-01 00:00", "0.425", "5.12"),
        approach("2020 AB", "2020-Jan-03 10:45", "0.0123", "7.891"),
        approach("99942", "2029-Apr-13 21:46", "0.000254", "7.42"),
    ];
    NeoDatabase::new(neos, approaches).unwrap()
}

pub fn output_path(dir: &TempDir, file_name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(file_name)).unwrap()
}
