//! Defines the decision tree classifier.
use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use serde::{Serialize, Deserialize};

use crate::{Classifier, Dataset, Result};
use super::node::*;


/// Decision tree classifier.
/// This struct is a wrapper of the root `Node`
/// together with the index of the label column it was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    label: usize,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components(root: Node, label: usize) -> Self {
        Self { root, label }
    }


    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// The questions of all branches in pre-order.
    pub fn questions(&self) -> Vec<String> {
        let mut questions = Vec::new();
        self.root.collect_questions(&mut questions);
        questions
    }


    /// Number of edges on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn label_column(&self) -> usize {
        self.label
    }


    #[inline]
    fn predict<S: AsRef<str>>(&self, row: &[S]) -> &str {
        self.root.predict(row)
    }
}


impl Dataset {
    /// Returns a copy of this dataset with a `DT_prediction` column.
    /// See [`Dataset::with_classifier_column`] for the encoding.
    #[inline]
    pub fn with_predictions(&self, tree: &DecisionTreeClassifier)
        -> Result<Self>
    {
        self.with_classifier_column(tree, "DT_prediction")
    }
}
