//! This directory provides some features for evaluation and tuning
//! - Cross validation / hold-out splits of a dataset
//! - Accuracy estimates for decision trees and other classifiers
//! - Per-iteration logging of the separation search

/// Provides the cross validation iterator.
pub mod cross_validation;

/// Provides accuracy estimates for classifiers.
pub mod tree_evaluation;

/// Provides a logger for `SeparationOptimizer`.
pub mod search_logger;


pub use cross_validation::{CrossValidation, train_test_split};
pub use tree_evaluation::{
    holdout_accuracy,
    kfold_accuracy,
    holdout_accuracy_with,
    kfold_accuracy_with,
};
pub use search_logger::SearchLogger;
