//! # CSV export
//!
//! Columns, in order:
//!
//! | Header                      | Value                                   |
//! |-----------------------------|-----------------------------------------|
//! | `Date object string as UTC` | `datetime_utc`                          |
//! | `Distance`                  | `distance_au`                           |
//! | `Velocity in km/s`          | `velocity_km_s`                         |
//! | `Designation`               | `neo.designation`                       |
//! | `Name`                      | `neo.name`, or `None` when absent       |
//! | `Diameter in km`            | `neo.diameter_km`, `nan` when unknown   |
//! | `Potentially Hazardous`     | `True` / `False`                        |
//!
//! Floats are written with the shortest digits that read back to the same
//! value. Magnitudes in `[1e-4, 1e16)` (and zero) are plain decimals that keep a
//! `.0` on integral values (`1.0`, `0.425`, `16.84`); the others use scientific
//! notation with a signed exponent of at least two digits (`1.96e-05`, `1e+16`).
//! Records end with CRLF.
use camino::Utf8Path;
use csv::{Terminator, WriterBuilder};
use log::{debug, error, info};
use serde::Serialize;

use crate::{
    close_approach::CloseApproach,
    constants::{CSV_HEADER, FALSE_TOKEN, MISSING_NAME_TOKEN, NAN_TOKEN, TRUE_TOKEN},
    database::NeoLookup,
    neo_errors::NeoError,
    serialize::SerializedApproach,
};

/// One data row of the CSV export.
#[derive(Debug, Serialize, PartialEq)]
struct CsvRow<'a> {
    datetime_utc: &'a str,
    distance_au: String,
    velocity_km_s: String,
    designation: &'a str,
    name: &'a str,
    diameter_km: String,
    potentially_hazardous: &'static str,
}

impl<'a> From<&'a SerializedApproach> for CsvRow<'a> {
    fn from(approach: &'a SerializedApproach) -> Self {
        CsvRow {
            datetime_utc: &approach.datetime_utc,
            distance_au: format_float(approach.distance_au),
            velocity_km_s: format_float(approach.velocity_km_s),
            designation: &approach.neo.designation,
            name: approach.neo.name.as_deref().unwrap_or(MISSING_NAME_TOKEN),
            diameter_km: format_float(approach.neo.diameter_km),
            potentially_hazardous: if approach.neo.potentially_hazardous {
                TRUE_TOKEN
            } else {
                FALSE_TOKEN
            },
        }
    }
}

/// Write a stream of close approaches to a CSV file.
///
/// The header row is written first, even when `results` is empty. Rows follow
/// in the order of `results`.
///
/// Arguments
/// ---------
/// * `results`: linked close approaches, in output order
/// * `neos`: the registry the approaches were linked against
/// * `filename`: destination file, created or truncated
///
/// Return
/// ------
/// * `Ok(())` once every row is written and the file is flushed
///
/// Errors
/// ------
/// * [`NeoError::UnlinkedApproach`] / [`NeoError::MismatchedLink`] if an approach
///   cannot be resolved to its own NEO in `neos`; the rows before it stay in the file.
/// * [`NeoError::CsvError`] / [`NeoError::IoError`] if the file cannot be opened or written.
pub fn write_csv<'a, I, L>(results: I, neos: &L, filename: &Utf8Path) -> Result<(), NeoError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
    L: NeoLookup + ?Sized,
{
    debug!("event=export_start module=csv_export path={filename}");

    match write_rows(results, neos, filename) {
        Ok(rows) => {
            info!("event=export_done module=csv_export status=ok rows={rows} path={filename}");
            Ok(())
        }
        Err(err) => {
            error!("event=export_done module=csv_export status=error path={filename} error={err}");
            Err(err)
        }
    }
}

fn write_rows<'a, I, L>(results: I, neos: &L, filename: &Utf8Path) -> Result<usize, NeoError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
    L: NeoLookup + ?Sized,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_path(filename)?;

    writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for approach in results {
        let serialized = approach.serialize(neos)?;
        writer.serialize(CsvRow::from(&serialized))?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Render a float the way the CSV schema expects.
///
/// * NaN → `nan`, infinities → `inf` / `-inf`
/// * zero and magnitudes in `[1e-4, 1e16)` → shortest round-trip decimal, `.0` kept on integral values
/// * other magnitudes → shortest round-trip mantissa, exponent as `e-05` / `e+16`
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        NAN_TOKEN.to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value != 0.0 && !(1e-4..1e16).contains(&value.abs()) {
        format_scientific(value)
    } else {
        format!("{value:?}")
    }
}

fn format_scientific(value: f64) -> String {
    let text = format!("{value:e}");
    match text
        .split_once('e')
        .map(|(mantissa, exponent)| (mantissa, exponent.parse::<i32>()))
    {
        Some((mantissa, Ok(exponent))) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        _ => text,
    }
}
