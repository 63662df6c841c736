//! Error type shared by every component of the crate.
//!
//! Malformed cells never produce an error; they degrade to
//! documented defaults instead.
//! The variants below are reserved for invalid invocations
//! (empty inputs, bad indices, inconsistent parameters)
//! and for I/O failures at the boundary.
use thiserror::Error;


/// Result type alias used throughout `tablelens`.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors returned by `tablelens`.
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset (or partition) has no rows.
    #[error("the dataset has no rows")]
    EmptyDataset,

    /// The dataset has no column other than the label column.
    #[error("the dataset has no feature column besides the label column")]
    NoFeatureColumns,

    /// The optimizer was given an empty column selection.
    #[error("at least one column must be selected")]
    NoColumnsSelected,

    /// A column index does not exist.
    #[error("column index {index} is out of range ({n_columns} columns)")]
    ColumnOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of columns in the dataset.
        n_columns: usize,
    },

    /// A row does not have as many cells as there are headers.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        /// Row index (0-based, header excluded).
        row: usize,
        /// Number of headers.
        expected: usize,
        /// Number of cells found.
        got: usize,
    },

    /// A column name does not exist.
    #[error("column `{0}` does not exist")]
    UnknownColumn(String),

    /// A hyperparameter is outside its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The transform name is not one of the supported functions.
    #[error("unknown transform `{0}`")]
    UnknownTransform(String),

    /// I/O failure while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while converting a `polars::DataFrame`.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Failure while (de)serializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub(crate) fn invalid<S: ToString>(name: &'static str, reason: S) -> Self {
        Self::InvalidParameter { name, reason: reason.to_string() }
    }
}
