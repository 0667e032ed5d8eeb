//! # Human-readable rendering
//!
//! [`ApproachDisplay`] renders a close approach as one sentence. It borrows the
//! approach and, when available, the linked NEO, so the sentence can name the
//! object by its full name (`433 Eros`) instead of its raw designation.
//!
//! Build it with [`crate::close_approach::CloseApproach::display`]; the plain
//! `Display` impl of `CloseApproach` uses the raw designation.
use std::fmt;

use crate::{close_approach::CloseApproach, near_earth_object::NearEarthObject};

/// Sentence adaptor for a [`CloseApproach`].
pub struct ApproachDisplay<'a> {
    approach: &'a CloseApproach,
    /// Linked NEO, `None` when unlinked or unresolvable.
    neo: Option<&'a NearEarthObject>,
    dist_prec: usize,
    vel_prec: usize,
}

impl<'a> ApproachDisplay<'a> {
    pub fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self {
            approach,
            neo,
            dist_prec: 2,
            vel_prec: 2,
        }
    }

    /// Fixed-point digits for the distance (default = 2).
    pub fn with_distance_precision(mut self, digits: usize) -> Self {
        self.dist_prec = digits;
        self
    }

    /// Fixed-point digits for the velocity (default = 2).
    pub fn with_velocity_precision(mut self, digits: usize) -> Self {
        self.vel_prec = digits;
        self
    }
}

impl fmt::Display for ApproachDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation().to_string(),
        };
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.dp$} au and a velocity of {:.vp$} km/s.",
            self.approach.time_str(),
            label,
            self.approach.distance(),
            self.approach.velocity(),
            dp = self.dist_prec,
            vp = self.vel_prec,
        )
    }
}
