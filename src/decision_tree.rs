//! Binary decision trees grown by Gini-impurity splitting.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the decision tree inducer.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;

mod criterion;
mod split_rule;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use node::{Node, BranchNode, LeafNode};
pub use criterion::gini;
pub use split_rule::{Splitter, LR};
