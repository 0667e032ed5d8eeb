//! # Export of close approaches
//!
//! Two terminal operations write an ordered stream of linked close approaches
//! to a file:
//!
//! * [`write_csv`] – seven fixed columns, header always present.
//! * [`write_json`] – one pretty-printed array of [`SerializedApproach`] records.
//!
//! Both take the stream, the registry the approaches were linked against, and
//! the destination path. They return `Ok(())` once the file is flushed.
//!
//! Error Handling
//! -----------------
//! * An unlinked approach aborts the export with [`NeoError::UnlinkedApproach`],
//!   one that resolves to a NEO of another designation with [`NeoError::MismatchedLink`].
//! * Open/write/flush failures surface as [`NeoError::IoError`] or [`NeoError::CsvError`].
//! * The file handle is dropped (closed) on every exit path. A CSV export that
//!   fails mid-stream leaves the rows written so far; the JSON export serializes
//!   every record before creating the file.
//!
//! [`SerializedApproach`]: crate::serialize::SerializedApproach
//! [`NeoError::UnlinkedApproach`]: crate::neo_errors::NeoError::UnlinkedApproach
//! [`NeoError::MismatchedLink`]: crate::neo_errors::NeoError::MismatchedLink
//! [`NeoError::IoError`]: crate::neo_errors::NeoError::IoError
//! [`NeoError::CsvError`]: crate::neo_errors::NeoError::CsvError
pub mod csv_export;
pub mod json_export;

pub use csv_export::write_csv;
pub use json_export::write_json;
