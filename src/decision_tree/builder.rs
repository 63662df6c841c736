use crate::{Dataset, Error, Result};
use crate::common::checker;
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use tablelens::prelude::*;
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new(&dataset)
///     .label_column(4)
///     .max_depth(3)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    dataset: &'a Dataset,
    label: Option<usize>,
    features: Option<Vec<usize>>,
    max_depth: Option<usize>,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// label_column: the column named `class` (case-insensitive),
    /// features: every column but the label column,
    /// max_depth: unbounded,
    /// ```
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            label: None,
            features: None,
            max_depth: None,
        }
    }


    /// Set the index of the column holding the class labels.
    #[inline]
    pub fn label_column(mut self, index: usize) -> Self {
        self.label = Some(index);
        self
    }


    /// Restrict the split candidates to `features`.
    /// The columns are scanned in the given order.
    #[inline]
    pub fn features(mut self, features: Vec<usize>) -> Self {
        self.features = Some(features);
        self
    }


    /// Specify the maximal depth of the tree.
    /// By default, a tree grows until no split improves the impurity.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<DecisionTree> {
        let label = match self.label {
            Some(label) => label,
            None => self.dataset.class_column()
                .ok_or_else(|| Error::UnknownColumn("class".to_string()))?,
        };
        checker::check_column(self.dataset, label)?;

        let features = match self.features {
            Some(features) => {
                for &j in features.iter() {
                    checker::check_column(self.dataset, j)?;
                }
                features.into_iter().filter(|&j| j != label).collect()
            },
            None => self.dataset.feature_columns(Some(label)),
        };

        if self.max_depth == Some(0) {
            return Err(Error::invalid("max_depth", "tree must have positive depth"));
        }

        Ok(DecisionTree::from_components(label, features, self.max_depth))
    }
}
