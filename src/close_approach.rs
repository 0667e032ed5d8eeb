//! # Close approaches
//!
//! A [`CloseApproach`] is one recorded or predicted passage of an NEO near
//! Earth: the epoch of closest approach (UTC), the nominal distance in AU and
//! the relative velocity in km/s.
//!
//! ## Back-reference to the NEO
//!
//! An approach does not own its NEO. It keeps the raw designation it was
//! loaded with and, once linked by [`crate::database::NeoDatabase`], a
//! [`NeoId`] resolved through any [`NeoLookup`]. The NEO itself owns the
//! approach, so there is no ownership cycle between the two types.
//!
//! ## See also
//!
//! * [`crate::time::cd_to_epoch`] – parsing of the raw `cd` calendar date.
//! * [`crate::serialize::SerializedApproach`] – flat export record.
use std::fmt;

use hifitime::Epoch;
use serde::Deserialize;

use crate::{
    constants::{AstronomicalUnit, KmPerSecond},
    database::{NeoId, NeoLookup},
    display::ApproachDisplay,
    near_earth_object::NearEarthObject,
    neo_errors::NeoError,
    serialize::{SerializedApproach, SerializedNeo},
    time::{cd_to_epoch, epoch_to_str},
};

/// Raw field set of one close approach, as read from the JPL close-approach data.
///
/// Column names of the JPL `cad.json` fields are accepted as aliases. Every
/// field is read as text and kept verbatim, so a designation such as `0433`
/// survives formats that guess value types. [`ApproachRecord::new`] coerces a
/// numeric designation to its decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApproachRecord {
    #[serde(alias = "des")]
    pub designation: Option<String>,
    #[serde(alias = "cd")]
    pub time: Option<String>,
    #[serde(alias = "dist")]
    pub distance: Option<String>,
    #[serde(alias = "v_rel")]
    pub velocity: Option<String>,
}

impl ApproachRecord {
    pub fn new(
        designation: impl ToString,
        time: impl Into<String>,
        distance: impl Into<String>,
        velocity: impl Into<String>,
    ) -> Self {
        ApproachRecord {
            designation: Some(designation.to_string()),
            time: Some(time.into()),
            distance: Some(distance.into()),
            velocity: Some(velocity.into()),
        }
    }
}

/// A close approach to Earth by an NEO.
///
/// Fields
/// -----------------
/// * `designation` – designation of the approaching NEO, as loaded.
/// * `time` – epoch of closest approach (UTC).
/// * `distance` – nominal approach distance (AU).
/// * `velocity` – relative approach velocity (km/s).
/// * `neo` – registry key of the linked NEO, `None` until linked.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: Epoch,
    distance: AstronomicalUnit,
    velocity: KmPerSecond,
    neo: Option<NeoId>,
}

impl CloseApproach {
    /// Build a close approach from its raw fields.
    ///
    /// Arguments
    /// ---------
    /// * `record`: the raw fields
    ///
    /// Return
    /// ------
    /// * the validated, still unlinked [`CloseApproach`]
    ///
    /// Errors
    /// ------
    /// * [`NeoError::MissingField`] if any field is missing.
    /// * [`NeoError::InvalidCalendarDate`] if the time is not `YYYY-Mon-DD hh:mm`.
    /// * [`NeoError::InvalidFloat`] if the distance or velocity is not a number.
    pub fn from_record(record: ApproachRecord) -> Result<Self, NeoError> {
        let designation = record
            .designation
            .ok_or(NeoError::MissingField("designation"))?;
        let time = record.time.ok_or(NeoError::MissingField("time"))?;
        let distance = record.distance.ok_or(NeoError::MissingField("distance"))?;
        let velocity = record.velocity.ok_or(NeoError::MissingField("velocity"))?;

        Ok(CloseApproach {
            designation,
            time: cd_to_epoch(&time)?,
            distance: parse_float("distance", &distance)?,
            velocity: parse_float("velocity", &velocity)?,
            neo: None,
        })
    }

    /// Designation of the approaching NEO, available before linking.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> Epoch {
        self.time
    }

    /// Approach time as `YYYY-MM-DD hh:mm`, without seconds.
    pub fn time_str(&self) -> String {
        epoch_to_str(&self.time)
    }

    pub fn distance(&self) -> AstronomicalUnit {
        self.distance
    }

    pub fn velocity(&self) -> KmPerSecond {
        self.velocity
    }

    pub fn neo_id(&self) -> Option<NeoId> {
        self.neo
    }

    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Set the back-reference. An approach can be linked only once.
    pub(crate) fn link(&mut self, id: NeoId) -> Result<(), NeoError> {
        if self.neo.is_some() {
            return Err(NeoError::AlreadyLinked(self.designation.clone()));
        }
        self.neo = Some(id);
        Ok(())
    }

    /// Resolve the linked NEO through a registry.
    ///
    /// The resolved NEO must carry the approach's designation, so a registry
    /// other than the one used for linking cannot substitute another object.
    ///
    /// Errors
    /// ------
    /// * [`NeoError::UnlinkedApproach`] if the approach is not linked, or if the
    ///   registry has no NEO under the stored key.
    /// * [`NeoError::MismatchedLink`] if the NEO under the stored key has another designation.
    pub fn neo<'a, L: NeoLookup + ?Sized>(
        &self,
        neos: &'a L,
    ) -> Result<&'a NearEarthObject, NeoError> {
        let neo = self
            .neo
            .and_then(|id| neos.neo(id))
            .ok_or_else(|| NeoError::UnlinkedApproach(self.designation.clone()))?;

        if neo.designation() != self.designation {
            return Err(NeoError::MismatchedLink {
                approach: self.designation.clone(),
                neo: neo.designation().to_string(),
            });
        }
        Ok(neo)
    }

    /// Flat record of this approach and its NEO, ready for export.
    ///
    /// No rounding is applied: formatting belongs to the exporters.
    ///
    /// Arguments
    /// ---------
    /// * `neos`: the registry the approach was linked against
    ///
    /// Return
    /// ------
    /// * the [`SerializedApproach`], or the error of [`CloseApproach::neo`] when
    ///   the approach cannot be resolved to its own NEO
    pub fn serialize<L: NeoLookup + ?Sized>(
        &self,
        neos: &L,
    ) -> Result<SerializedApproach, NeoError> {
        let neo = self.neo(neos)?;
        Ok(SerializedApproach {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
            neo: SerializedNeo {
                designation: neo.designation().to_string(),
                name: neo.name().map(str::to_string),
                diameter_km: neo.diameter(),
                potentially_hazardous: neo.hazardous(),
            },
        })
    }

    /// Display adaptor naming the linked NEO by its full name.
    pub fn display<'a, L: NeoLookup + ?Sized>(&'a self, neos: &'a L) -> ApproachDisplay<'a> {
        ApproachDisplay::new(self, self.neo(neos).ok())
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, NeoError> {
    raw.trim().parse().map_err(|_| NeoError::InvalidFloat {
        field,
        value: raw.to_string(),
    })
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ApproachDisplay::new(self, None), f)
    }
}
