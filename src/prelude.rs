//! Exports the dataset type, the engines and their builders.
//!
pub use crate::dataset::{
    Dataset,
    DatasetReader,
    Normalization,
};


pub use crate::data_type::{
    // Type inference ---------------------------
    DataType,
    ColumnInfo,
    CategoricalMapping,
};


pub use crate::classifier::Classifier;


pub use crate::decision_tree::{
    // Decision tree ----------------------------
    DecisionTreeBuilder,
    DecisionTree,
    DecisionTreeClassifier,
};


pub use crate::random_forest::{
    // Random forest ----------------------------
    RandomForestBuilder,
    RandomForest,
    RandomForestClassifier,
};


pub use crate::features::{
    // Derived features -------------------------
    Direction,
    PureRegion,
};


pub use crate::pca::PcaModel;


pub use crate::optimizer::{
    // Separation search ------------------------
    SeparationOptimizer,
    OptimizerConfig,
    Initialization,
    Transform,
};


pub use crate::research::{
    CrossValidation,
    SearchLogger,
};


pub use crate::error::{Error, Result};
