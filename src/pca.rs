//! Principal components by power iteration with deflation.
//!
//! The Gram matrix `AᵀA` of the centered data is decomposed
//! one direction at a time;
//! singular values are kept in deflation order, not sorted.

mod linalg;
mod power_iteration;
/// Defines the fitted model.
pub mod pca_model;


pub use pca_model::PcaModel;
