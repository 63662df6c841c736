#![warn(missing_docs)]

//!
//! A crate that explores tabular data whose cells are raw strings.
//!
//! The crate provides four engines.
//!
//! - Type inference
//!     Every column is classified as NUMERICAL, CATEGORICAL, NOMINAL,
//!     BINARY, TIMESTAMP, LABEL or UNKNOWN.
//!     Categorical columns get a reversible mapping to integer codes.
//!
//! - Decision trees
//!     Binary trees asking "Is column ≤ threshold?",
//!     grown greedily by Gini impurity.
//!
//! - Principal component analysis
//!     Power iteration with deflation on the Gram matrix
//!     of the centered data.
//!
//! - Class-separation tuning
//!     Finite-difference gradient ascent of the Fisher score
//!     of a (trigonometrically wrapped) linear combination of columns.
//!
//! Around them sit a random forest of the same trees,
//! derived feature columns and single-column pure regions.
//!
//! All engines read an immutable [`Dataset`]
//! and return new values; derived columns are appended to a copy.
//!
//! # Example
//! ```no_run
//! use tablelens::prelude::*;
//!
//! let dataset = DatasetReader::new()
//!     .file("/path/to/data/file.csv")
//!     .has_header(true)
//!     .class_column("class")
//!     .read()
//!     .unwrap();
//! let label = dataset.class_column();
//!
//! for info in dataset.annotate(label) {
//!     println!("{}", info.display_name());
//! }
//!
//! let tree = DecisionTreeBuilder::new(&dataset)
//!     .build()
//!     .unwrap()
//!     .produce(&dataset)
//!     .unwrap();
//! println!("{tree}");
//! ```

pub mod common;
pub mod error;
pub mod data_type;
pub mod dataset;
pub mod classifier;
pub mod decision_tree;
pub mod random_forest;
pub mod features;
pub mod pca;
pub mod optimizer;
pub mod research;

pub mod prelude;


pub use error::{Error, Result};

pub use data_type::{
    DataType,
    ColumnInfo,
    CategoricalMapping,
    classify,
    categorical_mapping,
    is_ip_address,
};

pub use dataset::{
    Dataset,
    DatasetReader,
    DatasetStats,
    ColumnRange,
    Normalization,
};

pub use classifier::Classifier;

pub use decision_tree::{
    DecisionTreeBuilder,
    DecisionTree,
    DecisionTreeClassifier,
    Node,
    gini,
};

pub use random_forest::{
    RandomForestBuilder,
    RandomForest,
    RandomForestClassifier,
};

pub use features::{
    Direction,
    CovariancePair,
    PureRegion,
    covariance,
};

pub use pca::PcaModel;

pub use optimizer::{
    SeparationOptimizer,
    SeparationObjective,
    OptimizerConfig,
    OptimizerState,
    Initialization,
    Transform,
    Step,
    fisher_score,
};

pub use research::{
    CrossValidation,
    SearchLogger,
    train_test_split,
    holdout_accuracy,
    kfold_accuracy,
    holdout_accuracy_with,
    kfold_accuracy_with,
};
