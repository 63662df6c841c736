//! Bagged ensembles of decision trees voting by majority.

/// Defines the builder of `RandomForest`.
pub mod builder;
/// Defines the forest inducer.
pub mod rforest;
/// Defines the classifier produced by `RandomForest`.
pub mod rforest_classifier;


pub use builder::RandomForestBuilder;
pub use rforest::RandomForest;
pub use rforest_classifier::RandomForestClassifier;
