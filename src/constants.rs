//! # Constants and type definitions
//!
//! Unit aliases, raw-field conventions of the NASA data files, and the fixed
//! labels of the exported CSV schema.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in astronomical units
pub type AstronomicalUnit = f64;

/// Length in kilometers
pub type Kilometer = f64;

/// Relative velocity in kilometers per second
pub type KmPerSecond = f64;

// -------------------------------------------------------------------------------------------------
// Raw field conventions
// -------------------------------------------------------------------------------------------------

/// Raw value of the `pha` column flagging a potentially hazardous object
pub const HAZARDOUS_FLAG: &str = "Y";

/// Textual form of a float whose value is unknown (NaN)
pub const NAN_TOKEN: &str = "nan";

// -------------------------------------------------------------------------------------------------
// CSV export schema
// -------------------------------------------------------------------------------------------------

/// Column labels of the CSV export, in output order
pub const CSV_HEADER: [&str; 7] = [
    "Date object string as UTC",
    "Distance",
    "Velocity in km/s",
    "Designation",
    "Name",
    "Diameter in km",
    "Potentially Hazardous",
];

/// Cell written in the `Name` column when the NEO has no name
pub const MISSING_NAME_TOKEN: &str = "None";

/// Cell written for a true boolean
pub const TRUE_TOKEN: &str = "True";

/// Cell written for a false boolean
pub const FALSE_TOKEN: &str = "False";
