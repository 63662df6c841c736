//! Defines the random forest classifier.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Dataset, DecisionTreeClassifier, Result};
use crate::common::utils::{label_counts, majority};


/// Random forest classifier.
/// Every tree casts one vote;
/// ties go to the lexicographically smallest label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestClassifier {
    trees: Vec<DecisionTreeClassifier>,
    label: usize,
}


impl RandomForestClassifier {
    #[inline]
    pub(super) fn from_components(
        trees: Vec<DecisionTreeClassifier>,
        label: usize,
    ) -> Self
    {
        Self { trees, label }
    }


    /// The trees of the forest.
    #[inline]
    pub fn trees(&self) -> &[DecisionTreeClassifier] {
        &self.trees[..]
    }


    /// Number of trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}


impl Classifier for RandomForestClassifier {
    #[inline]
    fn label_column(&self) -> usize {
        self.label
    }


    fn predict<S: AsRef<str>>(&self, row: &[S]) -> &str {
        let votes = label_counts(
            self.trees.iter().map(|tree| tree.predict(row))
        );
        majority(&votes).0
    }
}


impl Dataset {
    /// Returns a copy of this dataset with an `RF_prediction` column.
    /// See [`Dataset::with_classifier_column`] for the encoding.
    #[inline]
    pub fn with_forest_predictions(&self, forest: &RandomForestClassifier)
        -> Result<Self>
    {
        self.with_classifier_column(forest, "RF_prediction")
    }
}
