use rand::prelude::*;
use rayon::prelude::*;

use crate::{Dataset, DecisionTree, Result};
use crate::common::checker;
use super::rforest_classifier::RandomForestClassifier;


/// The Random Forest algorithm.
///
/// Each tree is grown by [`DecisionTree`] on a bootstrap sample,
/// `⌊sample_ratio · n_rows⌋` rows (at least one) drawn with replacement.
/// The samples are drawn one after another from a single seeded
/// generator, so the forest does not depend on the thread schedule.
///
/// [`RandomForest`] is constructed
/// by [`RandomForestBuilder`](super::RandomForestBuilder).
#[derive(Debug, Clone)]
pub struct RandomForest {
    tree: DecisionTree,
    n_trees: usize,
    sample_ratio: f64,
    seed: u64,
}


impl RandomForest {
    #[inline]
    pub(super) fn from_components(
        tree: DecisionTree,
        n_trees: usize,
        sample_ratio: f64,
        seed: u64,
    ) -> Self
    {
        Self { tree, n_trees, sample_ratio, seed, }
    }


    /// Number of trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.n_trees
    }


    /// Trains the forest on `dataset`.
    pub fn produce(&self, dataset: &Dataset)
        -> Result<RandomForestClassifier>
    {
        checker::check_nonempty(dataset)?;

        let n_rows = dataset.shape().0;
        let sample_size = ((n_rows as f64 * self.sample_ratio) as usize)
            .clamp(1, n_rows);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let samples = (0..self.n_trees)
            .map(|_| {
                (0..sample_size)
                    .map(|_| rng.gen_range(0..n_rows))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let trees = samples.par_iter()
            .map(|ix| self.tree.produce(&dataset.subset(ix)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            trees = trees.len(),
            sample_size,
            "grew random forest"
        );
        Ok(RandomForestClassifier::from_components(
            trees, self.tree.label_column()
        ))
    }
}
