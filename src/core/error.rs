//! Structural ingestion errors with diagnostics
//!
//! Only structural conditions live here: a missing join key, an empty
//! sheet, missing required columns, or an unreadable file. They block the
//! ingestion attempt (or the view that needs the column) and are reported
//! to the caller; any previously loaded table is unaffected. Malformed cell
//! values are not errors at all — they degrade to defaults (null code,
//! verbatim string, zero duration) where they are parsed.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// A required join key column is absent from one of the input tables.
#[derive(Debug, Error, Diagnostic)]
#[error("join key column '{key}' not found in the {side} table")]
#[diagnostic(
    code(emt::ingest::merge),
    help("both input files need an '{key}' column to be joined; check the header row")
)]
pub struct MergeError {
    pub key: String,
    /// Which input lacked the key ("equipment" or "maintenance").
    pub side: &'static str,
}

/// The selected input has a header but zero data rows.
#[derive(Debug, Error, Diagnostic)]
#[error("{}: no data rows", path.display())]
#[diagnostic(
    code(emt::ingest::empty),
    help("the file was read but contains no records; the previous dataset, if any, is untouched")
)]
pub struct EmptyInputError {
    pub path: PathBuf,
}

/// Required columns are absent after normalization.
#[derive(Debug, Error, Diagnostic)]
#[error("required column(s) missing: {}", columns.join(", "))]
#[diagnostic(
    code(emt::ingest::missing_column),
    help("this view needs the listed columns; rename the headers or supply a corrected file")
)]
pub struct MissingColumnError {
    pub columns: Vec<String>,
}

/// Any structural failure while building a dataset.
#[derive(Debug, Error, Diagnostic)]
pub enum IngestError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    MissingColumn(#[from] MissingColumnError),

    #[error("{}: {source}", path.display())]
    #[diagnostic(code(emt::ingest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    #[diagnostic(
        code(emt::ingest::csv),
        help("the file could not be parsed as CSV; re-export it and retry")
    )]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
