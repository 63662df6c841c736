//! Defines the inner representation
//! of the Decision Tree class.
use std::fmt;

use serde::{Serialize, Deserialize};

use super::split_rule::{Splitter, LR};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(rule: Splitter, left: Node, right: Node) -> Self {
        Self { rule, left: Box::new(left), right: Box::new(right), }
    }


    /// The splitting rule of this branch.
    #[inline]
    pub fn rule(&self) -> &Splitter {
        &self.rule
    }


    /// The subtree for the rows satisfying the rule.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// The subtree for the other rows.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }


    /// The question asked at this branch.
    #[inline]
    pub fn question(&self) -> String {
        self.rule.question()
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
    pub(super) n_cases: usize,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(super) fn from_raw(label: &str, n_cases: usize) -> Self {
        Self { label: label.to_string(), n_cases, }
    }


    /// The predicted label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// The number of training rows that reached this leaf.
    #[inline]
    pub fn n_cases(&self) -> usize {
        self.n_cases
    }
}


impl Node {
    /// Returns the label predicted for `row`.
    pub fn predict<S: AsRef<str>>(&self, row: &[S]) -> &str {
        let mut node = self;
        loop {
            match node {
                Node::Branch(b) => {
                    node = match b.rule.split(row) {
                        LR::Left => &*b.left,
                        LR::Right => &*b.right,
                    };
                },
                Node::Leaf(l) => { return &l.label; },
            }
        }
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.left.n_leaves() + b.right.n_leaves(),
            Node::Leaf(_) => 1,
        }
    }


    /// Pushes the questions of this subtree in pre-order.
    pub(super) fn collect_questions(&self, questions: &mut Vec<String>) {
        if let Node::Branch(b) = self {
            questions.push(b.question());
            b.left.collect_questions(questions);
            b.right.collect_questions(questions);
        }
    }


    pub(super) fn fmt_indented(&self, f: &mut fmt::Formatter, level: usize)
        -> fmt::Result
    {
        let indent = "  ".repeat(level);
        match self {
            Node::Branch(b) => {
                writeln!(f, "{indent}Q: {}", b.question())?;
                b.left.fmt_indented(f, level + 1)?;
                b.right.fmt_indented(f, level + 1)
            },
            Node::Leaf(l) => {
                writeln!(f, "{indent}Predict: {} ({} cases)", l.label, l.n_cases)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{feat} <= {thr} ?\" ];\n",
                    feat = escape(&b.rule.name),
                    thr = b.rule.threshold
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p} ({n})\", \
                     shape = box, \
                     ];\n",
                    p = escape(&l.label),
                    n = l.n_cases,
                );

                (vec![info], id + 1)
            }
        }
    }
}


fn escape(label: &str) -> String {
    label.replace('"', "\\\"")
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
