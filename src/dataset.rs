//! Struct `Dataset` represents an immutable snapshot of a table.
//!
//! Cells are kept as the raw strings read from the file;
//! the algorithms decide how to interpret them.

// Provides the dataset struct.
pub(crate) mod dataset_struct;
// Provides a struct that reads a file.
pub(crate) mod dataset_reader;
// Provides min-max / z-score normalization.
pub(crate) mod normalization;
// Provides summary statistics.
pub(crate) mod stats;


pub use dataset_struct::Dataset;
pub use dataset_reader::DatasetReader;
pub use normalization::Normalization;
pub use stats::{DatasetStats, ColumnRange};
