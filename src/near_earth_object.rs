//! # Near-Earth objects
//!
//! A [`NearEarthObject`] carries the identity and physical attributes of one
//! catalogued NEO, plus the ordered collection of its close approaches.
//!
//! ## Raw data quirks
//!
//! Objects are built from a [`NeoRecord`], the unvalidated field set read from
//! the NASA catalogue (`neos.csv`). The catalogue is messy:
//!
//! * most objects have **no IAU name** → an empty or missing name becomes `None`,
//! * most objects have **no measured diameter** → an empty or missing diameter becomes `NaN`,
//! * the hazard flag is `"Y"`, `"N"`, or empty → only `"Y"` means hazardous.
//!
//! ## See also
//!
//! * [`crate::close_approach::CloseApproach`] – the approach events owned by an NEO.
//! * [`crate::database::NeoDatabase`] – links approaches to their NEO.
use std::fmt;

use serde::Deserialize;

use crate::{
    close_approach::CloseApproach,
    constants::{Kilometer, HAZARDOUS_FLAG, NAN_TOKEN},
    neo_errors::NeoError,
};

/// Raw field set of one NEO, as read from the catalogue.
///
/// Every field is optional so that both a missing column and an empty cell can
/// be represented; validation happens in [`NearEarthObject::from_record`].
/// Column names of the NASA `neos.csv` file are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NeoRecord {
    #[serde(alias = "pdes")]
    pub designation: Option<String>,
    pub name: Option<String>,
    pub diameter: Option<String>,
    #[serde(alias = "pha")]
    pub hazardous: Option<String>,
}

impl NeoRecord {
    /// Record with the given designation and every other field absent.
    pub fn new(designation: impl Into<String>) -> Self {
        NeoRecord {
            designation: Some(designation.into()),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_diameter(mut self, diameter: impl Into<String>) -> Self {
        self.diameter = Some(diameter.into());
        self
    }

    pub fn with_hazardous(mut self, hazardous: impl Into<String>) -> Self {
        self.hazardous = Some(hazardous.into());
        self
    }
}

/// A near-Earth object (NEO).
///
/// Fields
/// -----------------
/// * `designation` – primary designation, unique across the catalogue and never empty.
/// * `name` – IAU name, `None` when unknown (never an empty string).
/// * `diameter` – diameter in kilometers, `NaN` when unknown.
/// * `hazardous` – whether the object is flagged as potentially hazardous.
/// * `approaches` – close approaches of this object, in insertion order.
///
/// The approach collection starts empty; it is filled only by
/// [`crate::database::NeoDatabase::new`].
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: Kilometer,
    hazardous: bool,
    approaches: Vec<CloseApproach>,
}

impl NearEarthObject {
    /// Build a NEO from its raw catalogue fields.
    ///
    /// Arguments
    /// ---------
    /// * `record`: the raw fields
    ///
    /// Return
    /// ------
    /// * the validated [`NearEarthObject`] with an empty approach collection
    ///
    /// Errors
    /// ------
    /// * [`NeoError::MissingField`] if the designation is missing or empty.
    /// * [`NeoError::InvalidFloat`] if a non-empty diameter is not a non-negative number.
    pub fn from_record(record: NeoRecord) -> Result<Self, NeoError> {
        let designation = record
            .designation
            .filter(|d| !d.is_empty())
            .ok_or(NeoError::MissingField("designation"))?;

        let name = record.name.filter(|n| !n.is_empty());

        let diameter = match record.diameter.as_deref() {
            None | Some("") => f64::NAN,
            Some(raw) => parse_diameter(raw)?,
        };

        let hazardous = record.hazardous.as_deref() == Some(HAZARDOUS_FLAG);

        Ok(NearEarthObject {
            designation,
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        })
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, `NaN` when unknown.
    pub fn diameter(&self) -> Kilometer {
        self.diameter
    }

    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Close approaches of this NEO, in the order they were linked.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Designation followed by the name when there is one, e.g. `433 Eros`.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {}", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Append a linked approach and return its position in the collection.
    pub(crate) fn push_approach(&mut self, approach: CloseApproach) -> usize {
        self.approaches.push(approach);
        self.approaches.len() - 1
    }
}

fn parse_diameter(raw: &str) -> Result<Kilometer, NeoError> {
    let invalid = || NeoError::InvalidFloat {
        field: "diameter",
        value: raw.to_string(),
    };

    let diameter: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if diameter < 0.0 {
        return Err(invalid());
    }
    Ok(diameter)
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous {
            "is potentially hazardous"
        } else {
            "is not potentially hazardous"
        };
        if self.diameter.is_nan() {
            write!(
                f,
                "NEO {} has a diameter of {} km and {}.",
                self.fullname(),
                NAN_TOKEN,
                hazard
            )
        } else {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {}.",
                self.fullname(),
                self.diameter,
                hazard
            )
        }
    }
}

#[cfg(test)]
mod near_earth_object_test {
    use super::*;

    fn eros() -> NeoRecord {
        NeoRecord::new("433")
            .with_name("Eros")
            .with_diameter("16.84")
            .with_hazardous("N")
    }

    #[test]
    fn test_from_record() {
        let neo = NearEarthObject::from_record(eros()).unwrap();
        assert_eq!(neo.designation(), "433");
        assert_eq!(neo.name(), Some("Eros"));
        assert_eq!(neo.diameter(), 16.84);
        assert!(!neo.hazardous());
        assert!(neo.approaches().is_empty());
    }

    #[test]
    fn test_missing_designation() {
        let record = NeoRecord {
            name: Some("Eros".into()),
            ..Default::default()
        };
        assert_eq!(
            NearEarthObject::from_record(record).unwrap_err(),
            NeoError::MissingField("designation")
        );

        assert_eq!(
            NearEarthObject::from_record(NeoRecord::new("")).unwrap_err(),
            NeoError::MissingField("designation")
        );
    }

    #[test]
    fn test_name_normalization() {
        let neo = NearEarthObject::from_record(NeoRecord::new("2020 AB")).unwrap();
        assert_eq!(neo.name(), None);
        assert_eq!(neo.fullname(), "2020 AB");

        let neo = NearEarthObject::from_record(NeoRecord::new("2020 AB").with_name("")).unwrap();
        assert_eq!(neo.name(), None);
        assert_eq!(neo.fullname(), "2020 AB");

        let neo = NearEarthObject::from_record(eros()).unwrap();
        assert_eq!(neo.fullname(), "433 Eros");
    }

    #[test]
    fn test_diameter_normalization() {
        let neo = NearEarthObject::from_record(NeoRecord::new("1")).unwrap();
        assert!(neo.diameter().is_nan());
        assert!(!neo.has_known_diameter());

        let neo = NearEarthObject::from_record(NeoRecord::new("1").with_diameter("")).unwrap();
        assert!(neo.diameter().is_nan());

        let neo = NearEarthObject::from_record(NeoRecord::new("1").with_diameter("0.5")).unwrap();
        assert_eq!(neo.diameter(), 0.5);

        let neo = NearEarthObject::from_record(NeoRecord::new("1").with_diameter("939.4")).unwrap();
        assert_eq!(neo.diameter(), 939.4);
    }

    #[test]
    fn test_invalid_diameter() {
        for bad in ["abc", "1.2.3", "-4.0"] {
            assert_eq!(
                NearEarthObject::from_record(NeoRecord::new("1").with_diameter(bad)).unwrap_err(),
                NeoError::InvalidFloat {
                    field: "diameter",
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_hazardous_flag() {
        let neo = NearEarthObject::from_record(NeoRecord::new("1").with_hazardous("Y")).unwrap();
        assert!(neo.hazardous());

        for flag in ["N", "", "y", "Yes", " Y"] {
            let neo =
                NearEarthObject::from_record(NeoRecord::new("1").with_hazardous(flag)).unwrap();
            assert!(!neo.hazardous(), "{flag:?} must not be hazardous");
        }

        let neo = NearEarthObject::from_record(NeoRecord::new("1")).unwrap();
        assert!(!neo.hazardous());
    }

    #[test]
    fn test_display() {
        let neo = NearEarthObject::from_record(eros()).unwrap();
        assert_eq!(
            neo.to_string(),
            "NEO 433 Eros has a diameter of 16.840 km and is not potentially hazardous."
        );

        let neo = NearEarthObject::from_record(
            NeoRecord::new("99942")
                .with_name("Apophis")
                .with_diameter("0.37")
                .with_hazardous("Y"),
        )
        .unwrap();
        assert_eq!(
            neo.to_string(),
            "NEO 99942 Apophis has a diameter of 0.370 km and is potentially hazardous."
        );

        let neo = NearEarthObject::from_record(NeoRecord::new("2020 AB")).unwrap();
        assert_eq!(
            neo.to_string(),
            "NEO 2020 AB has a diameter of nan km and is not potentially hazardous."
        );
    }
}
