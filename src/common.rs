//! Defines some common functions used in this library.

/// Numeric constants shared by the algorithms.
pub mod constants;

/// Defines some useful functions such as numeric cell parsing.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
