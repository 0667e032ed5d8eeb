//! # NEO registry
//!
//! [`NeoDatabase`] owns every [`NearEarthObject`] of a catalogue and resolves
//! the approach → NEO back-reference.
//!
//! ## Linking
//!
//! [`NeoDatabase::new`] takes the loaded NEOs and approaches and, for each
//! approach in input order:
//! 1. resolves the NEO whose designation equals the approach designation,
//! 2. stores that NEO's [`NeoId`] in the approach (exactly once),
//! 3. moves the approach into the NEO's approach collection.
//!
//! The global input order is kept so [`NeoDatabase::approaches`] yields the
//! approaches as the loader produced them.
//!
//! ## Lookup seam
//!
//! Serialization, display and export only need to turn a [`NeoId`] back into
//! a NEO. They do so through the [`NeoLookup`] trait, implemented here for
//! [`NeoDatabase`] and for plain NEO slices.
use std::collections::HashMap;

use log::debug;

use crate::{
    close_approach::CloseApproach, near_earth_object::NearEarthObject, neo_errors::NeoError,
};

/// Key of a NEO inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub usize);

/// Resolve a [`NeoId`] to the NEO it designates.
pub trait NeoLookup {
    /// Return the NEO stored under `id`, if any.
    fn neo(&self, id: NeoId) -> Option<&NearEarthObject>;
}

impl NeoLookup for [NearEarthObject] {
    fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.get(id.0)
    }
}

impl NeoLookup for Vec<NearEarthObject> {
    fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.get(id.0)
    }
}

/// Registry of NEOs with their linked close approaches.
#[derive(Debug, Clone, Default)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
    /// (owner, position in the owner's collection) for each approach, in input order
    approach_order: Vec<(NeoId, usize)>,
}

impl NeoDatabase {
    /// Build the registry and link every approach to its NEO.
    ///
    /// Arguments
    /// ---------
    /// * `neos`: the catalogue objects, each with an empty approach collection
    /// * `approaches`: the unlinked close approaches, in load order
    ///
    /// Return
    /// ------
    /// * the linked [`NeoDatabase`]
    ///
    /// Errors
    /// ------
    /// * [`NeoError::DuplicateDesignation`] if two NEOs share a designation.
    /// * [`NeoError::UnknownDesignation`] if an approach names no known NEO.
    /// * [`NeoError::AlreadyLinked`] if an approach was already linked elsewhere.
    pub fn new(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
    ) -> Result<Self, NeoError> {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();

        for (idx, neo) in neos.iter().enumerate() {
            let id = NeoId(idx);
            if by_designation
                .insert(neo.designation().to_string(), id)
                .is_some()
            {
                return Err(NeoError::DuplicateDesignation(
                    neo.designation().to_string(),
                ));
            }
            if let Some(name) = neo.name() {
                by_name.entry(name.to_string()).or_insert(id);
            }
        }

        let mut db = NeoDatabase {
            neos,
            by_designation,
            by_name,
            approach_order: Vec::with_capacity(approaches.len()),
        };

        for mut approach in approaches {
            let id = *db
                .by_designation
                .get(approach.designation())
                .ok_or_else(|| NeoError::UnknownDesignation(approach.designation().to_string()))?;
            approach.link(id)?;
            let position = db.neos[id.0].push_approach(approach);
            db.approach_order.push((id, position));
        }

        debug!(
            "event=database_linked module=database status=ok neos={} approaches={}",
            db.neos.len(),
            db.approach_order.len()
        );

        Ok(db)
    }

    /// Number of NEOs in the registry.
    pub fn len(&self) -> usize {
        self.neos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neos.is_empty()
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn id_of(&self, designation: &str) -> Option<NeoId> {
        self.by_designation.get(designation).copied()
    }

    /// Find a NEO by its primary designation (exact match).
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.id_of(designation).and_then(|id| self.neo(id))
    }

    /// Find a NEO by its IAU name (exact match).
    ///
    /// Names are not guaranteed unique; the first NEO loaded under a name wins.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).and_then(|id| self.neo(*id))
    }

    /// All linked approaches, in load order.
    pub fn approaches(&self) -> impl Iterator<Item = &CloseApproach> + '_ {
        self.approach_order
            .iter()
            .map(|(id, position)| &self.neos[id.0].approaches()[*position])
    }

    pub fn approach_count(&self) -> usize {
        self.approach_order.len()
    }
}

impl NeoLookup for NeoDatabase {
    fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }
}
