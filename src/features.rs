//! Derived columns and per-column summaries built on the raw cells.
//!
//! - Slope / distance features between pairs of n-D points
//! - Differences between neighboring columns
//! - Covariance ranking of columns against a target column
//! - Single-column pure regions and the "easy cases" they cover

/// Provides the slope and distance features.
pub mod pair_features;
/// Provides the sequential distance features.
pub mod sequential;
/// Provides covariance based column ranking.
pub mod covariance;
/// Provides pure region detection.
pub mod pure_region;


pub use sequential::Direction;
pub use covariance::{CovariancePair, covariance};
pub use pure_region::PureRegion;


/// Writes a derived cell the way every feature generator does.
#[inline(always)]
pub(crate) fn format_cell(value: f64) -> String {
    format!("{value:.4}")
}
