//! # JSON export
//!
//! The output is a single top-level array; each element is the serde shape of
//! a [`SerializedApproach`] (nested `neo` object, `name` as string or `null`,
//! `diameter_km` as number or `null`), pretty-printed with a 2-space indent.
//! An empty stream writes `[]`.
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use camino::Utf8Path;
use log::{debug, error, info};

use crate::{
    close_approach::CloseApproach, database::NeoLookup, neo_errors::NeoError,
    serialize::SerializedApproach,
};

/// Write a stream of close approaches to a JSON file.
///
/// Every approach is serialized before the file is created, so an unlinked
/// approach leaves the destination untouched.
///
/// Arguments
/// ---------
/// * `results`: linked close approaches, in output order
/// * `neos`: the registry the approaches were linked against
/// * `filename`: destination file, created or truncated
///
/// Return
/// ------
/// * `Ok(())` once the array is written and the file is flushed
///
/// Errors
/// ------
/// * [`NeoError::UnlinkedApproach`] / [`NeoError::MismatchedLink`] if an approach
///   cannot be resolved to its own NEO in `neos`.
/// * [`NeoError::IoError`] / [`NeoError::JsonError`] if the file cannot be created or written.
pub fn write_json<'a, I, L>(results: I, neos: &L, filename: &Utf8Path) -> Result<(), NeoError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
    L: NeoLookup + ?Sized,
{
    debug!("event=export_start module=json_export path={filename}");

    match write_array(results, neos, filename) {
        Ok(records) => {
            info!(
                "event=export_done module=json_export status=ok records={records} path={filename}"
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=export_done module=json_export status=error path={filename} error={err}"
            );
            Err(err)
        }
    }
}

fn write_array<'a, I, L>(results: I, neos: &L, filename: &Utf8Path) -> Result<usize, NeoError>
where
    I: IntoIterator<Item = &'a CloseApproach>,
    L: NeoLookup + ?Sized,
{
    let outputs = results
        .into_iter()
        .map(|approach| approach.serialize(neos))
        .collect::<Result<Vec<SerializedApproach>, NeoError>>()?;

    let mut writer = BufWriter::new(File::create(filename)?);
    serde_json::to_writer_pretty(&mut writer, &outputs)?;
    writer.flush()?;

    Ok(outputs.len())
}
