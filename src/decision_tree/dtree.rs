use std::fmt;

use crate::{Dataset, Result};
use crate::common::checker;
use crate::common::utils::{label_counts, majority};
use super::{
    node::*,
    criterion::best_split,
    split_rule::LR,
    dtree_classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm.
/// Given a labeled dataset,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`].
///
/// Every branch asks "Is column ≤ threshold?".
/// The split maximizing the Gini gain is chosen;
/// thresholds are the distinct numeric values of the partition.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use tablelens::prelude::*;
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&dataset)
///     .build()
///     .unwrap();
/// let f = tree.produce(&dataset).unwrap();
///
/// println!("{f}");
/// println!("accuracy (train) is: {}", f.accuracy(&dataset));
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    label: usize,
    features: Vec<usize>,
    max_depth: Option<usize>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        label: usize,
        features: Vec<usize>,
        max_depth: Option<usize>,
    ) -> Self
    {
        Self { label, features, max_depth, }
    }


    /// Index of the label column.
    #[inline]
    pub fn label_column(&self) -> usize {
        self.label
    }


    /// Grows a tree on `dataset`.
    /// Fails if `dataset` has no rows or lacks one of the columns.
    pub fn produce(&self, dataset: &Dataset) -> Result<DecisionTreeClassifier> {
        checker::check_nonempty(dataset)?;
        checker::check_column(dataset, self.label)?;
        for &j in self.features.iter() {
            checker::check_column(dataset, j)?;
        }

        let n_rows = dataset.shape().0;
        let indices = (0..n_rows).collect::<Vec<_>>();
        let root = self.full_tree(dataset, indices, 0);

        tracing::debug!(
            depth = root.depth(),
            leaves = root.n_leaves(),
            "grew decision tree"
        );
        Ok(DecisionTreeClassifier::from_components(root, self.label))
    }


    fn full_tree(&self, dataset: &Dataset, indices: Vec<usize>, depth: usize)
        -> Node
    {
        let counts = label_counts(
            indices.iter().map(|&i| dataset.cell(i, self.label))
        );

        // Pure partition.
        if counts.len() == 1 {
            let label = counts.keys().next().copied().unwrap_or_default();
            return Node::Leaf(LeafNode::from_raw(label, indices.len()));
        }

        let majority_leaf = || {
            let (label, _) = majority(&counts);
            Node::Leaf(LeafNode::from_raw(label, indices.len()))
        };

        if self.max_depth.is_some_and(|max| depth >= max) {
            return majority_leaf();
        }

        let split = match best_split(
            dataset, self.label, &self.features, &indices
        ) {
            Some(split) => split,
            None => { return majority_leaf(); },
        };

        tracing::trace!(
            column = split.rule.feature,
            threshold = split.rule.threshold,
            gain = split.gain,
            depth,
            "split partition"
        );

        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for &i in indices.iter() {
            match split.rule.split(dataset.row(i)) {
                LR::Left  => { lindices.push(i); },
                LR::Right => { rindices.push(i); },
            }
        }

        let left = self.full_tree(dataset, lindices, depth + 1);
        let right = self.full_tree(dataset, rindices, depth + 1);
        Node::Branch(BranchNode::from_raw(split.rule, left, right))
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.max_depth
            .map_or_else(|| "unbounded".to_string(), |d| d.to_string());
        writeln!(f, "Decision Tree")?;
        writeln!(f, "  Label column: {}", self.label)?;
        writeln!(f, "  Features: {:?}", self.features)?;
        writeln!(f, "  Max depth: {depth}")?;
        write!(f, "  Split criterion: Gini index")
    }
}
