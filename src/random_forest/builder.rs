use crate::{Dataset, DecisionTreeBuilder, Error, Result};
use crate::common::constants::{
    DEFAULT_SEED,
    DEFAULT_N_TREES,
    DEFAULT_SAMPLE_RATIO,
};
use super::rforest::RandomForest;


/// A struct that builds `RandomForest`.
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
/// let forest = RandomForestBuilder::new(&dataset)
///     .n_trees(25)
///     .sample_ratio(0.8)
///     .build()
///     .unwrap();
/// let f = forest.produce(&dataset).unwrap();
/// println!("accuracy (train) is: {}", f.accuracy(&dataset));
/// ```
#[derive(Clone)]
pub struct RandomForestBuilder<'a> {
    tree: DecisionTreeBuilder<'a>,
    n_trees: usize,
    sample_ratio: f64,
    seed: u64,
}


impl<'a> RandomForestBuilder<'a> {
    /// Construct a new instance of [`RandomForestBuilder`].
    /// By default, [`RandomForestBuilder`] sets the parameters as follows;
    /// ```text
    /// label_column: the column named `class` (case-insensitive),
    /// features: every column but the label column,
    /// max_depth: unbounded,
    /// n_trees: 10,
    /// sample_ratio: 0.7,
    /// seed: 42.
    /// ```
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            tree: DecisionTreeBuilder::new(dataset),
            n_trees: DEFAULT_N_TREES,
            sample_ratio: DEFAULT_SAMPLE_RATIO,
            seed: DEFAULT_SEED,
        }
    }


    /// Set the label column.
    #[inline]
    pub fn label_column(mut self, index: usize) -> Self {
        self.tree = self.tree.label_column(index);
        self
    }


    /// Set the feature columns every tree may split on.
    #[inline]
    pub fn features(mut self, features: Vec<usize>) -> Self {
        self.tree = self.tree.features(features);
        self
    }


    /// Set the maximal depth of every tree.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.tree = self.tree.max_depth(depth);
        self
    }


    /// Set the number of trees.
    #[inline]
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }


    /// Set the size of each bootstrap sample
    /// relative to the number of training rows.
    #[inline]
    pub fn sample_ratio(mut self, ratio: f64) -> Self {
        self.sample_ratio = ratio;
        self
    }


    /// Set the seed of the bootstrap sampling.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Build a [`RandomForest`].
    /// Fails on an invalid label or feature column,
    /// a zero depth, zero trees, or a ratio outside `(0, 1]`.
    pub fn build(self) -> Result<RandomForest> {
        if self.n_trees == 0 {
            return Err(Error::invalid("n_trees", "a forest needs at least one tree"));
        }
        if !(0f64 < self.sample_ratio && self.sample_ratio <= 1f64) {
            return Err(Error::invalid(
                "sample_ratio",
                format!("must be in (0, 1], got {}", self.sample_ratio),
            ));
        }

        let tree = self.tree.build()?;
        Ok(RandomForest::from_components(
            tree, self.n_trees, self.sample_ratio, self.seed
        ))
    }
}
