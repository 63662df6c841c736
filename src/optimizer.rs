//! Class-separation tuning of a linear combination of columns.
//!
//! The coefficients `c` of `T(Σ_j c_j x_j)` are moved along
//! a forward finite-difference gradient of the Fisher score
//! until every coefficient moves by at most the tolerance.

/// Defines the functions wrapping the linear combination.
pub mod transform;
/// Defines the Fisher separation score.
pub mod objective;
/// Defines the hyperparameters.
pub mod config;
/// Defines the state passed between steps.
pub mod state;
/// Defines the optimizer.
pub mod separation;


pub use transform::Transform;
pub use objective::{SeparationObjective, fisher_score};
pub use config::{OptimizerConfig, Initialization};
pub use state::{OptimizerState, Step};
pub use separation::SeparationOptimizer;
