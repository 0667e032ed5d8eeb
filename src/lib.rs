//! # neo_approach
//!
//! Data model for near-Earth objects (NEOs) and their close approaches to
//! Earth, and export of a selected set of approaches to CSV or JSON.
//!
//! ## Workflow
//!
//! 1. Build [`NearEarthObject`]s from [`NeoRecord`]s and [`CloseApproach`]es
//!    from [`ApproachRecord`]s (raw catalogue fields, missing names and
//!    unknown diameters included).
//! 2. Link them with [`NeoDatabase::new`].
//! 3. Select approaches (e.g. from [`NeoDatabase::approaches`]) and hand them
//!    to [`write_csv`] or [`write_json`].
//!
//! ```rust, no_run
//! use camino::Utf8Path;
//! use neo_approach::{
//!     write_csv, ApproachRecord, CloseApproach, NearEarthObject, NeoDatabase, NeoError, NeoRecord,
//! };
//!
//! fn main() -> Result<(), NeoError> {
//!     let eros = NearEarthObject::from_record(
//!         NeoRecord::new("433").with_name("Eros").with_diameter("16.84").with_hazardous("N"),
//!     )?;
//!     let approach = CloseApproach::from_record(ApproachRecord::new(
//!         "433",
//!         "2020-Jan-01 00:00",
//!         "0.425",
//!         "5.12",
//!     ))?;
//!
//!     let db = NeoDatabase::new(vec![eros], vec![approach])?;
//!     write_csv(db.approaches(), &db, Utf8Path::new("approaches.csv"))
//! }
//! ```

pub mod close_approach;
pub mod constants;
pub mod database;
pub mod display;
pub mod export;
pub mod logging;
pub mod near_earth_object;
pub mod neo_errors;
pub mod serialize;
pub mod time;

pub use close_approach::{ApproachRecord, CloseApproach};
pub use database::{NeoDatabase, NeoId, NeoLookup};
pub use display::ApproachDisplay;
pub use export::{write_csv, write_json};
pub use logging::{init_logging, LogSettings};
pub use near_earth_object::{NearEarthObject, NeoRecord};
pub use neo_errors::NeoError;
pub use serialize::{SerializedApproach, SerializedNeo};
