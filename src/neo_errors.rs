use thiserror::Error;

/// Errors raised while building, linking, serializing or exporting NEO records.
///
/// Variants group into four families:
/// * missing field – [`NeoError::MissingField`],
/// * parse – [`NeoError::InvalidFloat`], [`NeoError::InvalidCalendarDate`],
/// * link – [`NeoError::UnlinkedApproach`], [`NeoError::MismatchedLink`],
///   [`NeoError::AlreadyLinked`], [`NeoError::UnknownDesignation`],
///   [`NeoError::DuplicateDesignation`],
/// * resource – [`NeoError::IoError`], [`NeoError::CsvError`], [`NeoError::JsonError`].
///
/// [`NeoError::LoggingInit`] is raised only by [`crate::logging::init_logging`].
#[derive(Error, Debug)]
pub enum NeoError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid float for field `{field}`: {value:?}")]
    InvalidFloat { field: &'static str, value: String },

    #[error("Invalid calendar date (expected YYYY-Mon-DD hh:mm): {0:?}")]
    InvalidCalendarDate(String),

    #[error("Close approach of {0} is not linked to a near-Earth object")]
    UnlinkedApproach(String),

    #[error("Close approach of {approach} resolves to near-Earth object {neo}")]
    MismatchedLink { approach: String, neo: String },

    #[error("Close approach of {0} is already linked")]
    AlreadyLinked(String),

    #[error("No near-Earth object with designation {0}")]
    UnknownDesignation(String),

    #[error("Duplicate near-Earth object designation: {0}")]
    DuplicateDesignation(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV writer error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serializer error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

impl NeoError {
    /// Whether the error comes from the output destination rather than the data.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            NeoError::IoError(_) | NeoError::CsvError(_) | NeoError::JsonError(_)
        )
    }
}

impl PartialEq for NeoError {
    fn eq(&self, other: &Self) -> bool {
        use NeoError::*;
        match (self, other) {
            (MissingField(a), MissingField(b)) => a == b,
            (
                InvalidFloat {
                    field: fa,
                    value: va,
                },
                InvalidFloat {
                    field: fb,
                    value: vb,
                },
            ) => fa == fb && va == vb,
            (InvalidCalendarDate(a), InvalidCalendarDate(b)) => a == b,
            (UnlinkedApproach(a), UnlinkedApproach(b)) => a == b,
            (
                MismatchedLink {
                    approach: aa,
                    neo: na,
                },
                MismatchedLink {
                    approach: ab,
                    neo: nb,
                },
            ) => aa == ab && na == nb,
            (AlreadyLinked(a), AlreadyLinked(b)) => a == b,
            (UnknownDesignation(a), UnknownDesignation(b)) => a == b,
            (DuplicateDesignation(a), DuplicateDesignation(b)) => a == b,
            (LoggingInit(a), LoggingInit(b)) => a == b,

            // foreign errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
