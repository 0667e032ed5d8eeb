//! # Flat export records
//!
//! [`SerializedApproach`] is the exporter-facing view of one linked close
//! approach, produced by [`crate::close_approach::CloseApproach::serialize`]:
//!
//! ```text
//! datetime_utc            time_str of the approach
//! distance_au             distance, unrounded
//! velocity_km_s           velocity, unrounded
//! neo.designation         designation of the linked NEO
//! neo.name                name, or None
//! neo.diameter_km         diameter, NaN when unknown
//! neo.potentially_hazardous
//! ```
//!
//! The JSON shape is the serde shape of these structs. JSON has no NaN, so an
//! unknown diameter is written as `null` and read back as NaN.
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Kilometer, KmPerSecond};

/// Flat record of a close approach and its NEO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedApproach {
    pub datetime_utc: String,
    pub distance_au: AstronomicalUnit,
    pub velocity_km_s: KmPerSecond,
    pub neo: SerializedNeo,
}

/// NEO attributes nested in a [`SerializedApproach`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedNeo {
    pub designation: String,
    pub name: Option<String>,
    #[serde(with = "nan_as_null")]
    pub diameter_km: Kilometer,
    pub potentially_hazardous: bool,
}

// Two unknown diameters are the same value.
impl PartialEq for SerializedNeo {
    fn eq(&self, other: &Self) -> bool {
        self.designation == other.designation
            && self.name == other.name
            && (self.diameter_km == other.diameter_km
                || (self.diameter_km.is_nan() && other.diameter_km.is_nan()))
            && self.potentially_hazardous == other.potentially_hazardous
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
