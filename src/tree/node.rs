//! Defines the inner representation of the decision tree.

use std::fmt;

use super::split_rule::{Splitter, LR};
use crate::classifier::Classifier;
use crate::Sample;

/// Enumeration of `BranchNode` and `LeafNode`.
///
/// A node is either a branch with exactly two children or a leaf
/// with none; the type makes a one-child node unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that has two children.
    Branch(BranchNode),

    /// A node that has no child.
    Leaf(LeafNode),
}

/// Represents the branch nodes of a decision tree.
/// Each `BranchNode` owns its two children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}

impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(rule: Splitter, left: Box<Node>, right: Box<Node>) -> Self {
        Self { rule, left, right }
    }

    /// The feature column this branch splits on.
    #[inline]
    pub fn column(&self) -> usize {
        self.rule.column
    }

    /// The split value; rows with `feature[column] <= threshold`
    /// descend into the left child.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.rule.threshold.0
    }

    /// The subtree holding rows satisfying the predicate.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }

    /// The subtree holding all remaining rows.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(super) label: String,
}

impl LeafNode {
    /// Returns a `LeafNode` that predicts the given label.
    #[inline]
    pub(super) fn from_raw(label: String) -> Self {
        Self { label }
    }

    /// The class label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Node {
    /// The class label for a single feature vector.
    ///
    /// `features` must have the arity the tree was trained on.
    pub fn label_for<'a>(&'a self, features: &[f64]) -> &'a str {
        match self {
            Node::Branch(branch) => match branch.rule.split_value(features[branch.rule.column]) {
                LR::Left => branch.left.label_for(features),
                LR::Right => branch.right.label_for(features),
            },
            Node::Leaf(leaf) => &leaf.label,
        }
    }

    /// The number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(branch) => 1 + branch.left.depth().max(branch.right.depth()),
            Node::Leaf(_) => 0,
        }
    }

    /// Graphviz fragments for this subtree, numbering nodes from `id`.
    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(branch) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"feature {col} <= {thr:.2} ?\" ];\n",
                    col = branch.rule.column,
                    thr = branch.rule.threshold.0,
                );

                let (l_info, next_id) = branch.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = branch.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1,
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id,
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            }
            Node::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                    label = leaf.label,
                );

                (vec![info], id + 1)
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Branch(branch) => {
                writeln!(
                    f,
                    "{pad}Feature {col} <= {thr:.2}",
                    col = branch.rule.column,
                    thr = branch.rule.threshold.0,
                )?;
                branch.left.write_indented(f, indent + 1)?;
                writeln!(f, "{pad}else")?;
                branch.right.write_indented(f, indent + 1)
            }
            Node::Leaf(leaf) => writeln!(f, "{pad}Class: {label}", label = leaf.label),
        }
    }
}

impl Classifier for Node {
    #[inline]
    fn predict<'a>(&'a self, sample: &Sample, row: usize) -> &'a str {
        match self {
            Node::Branch(branch) => match branch.rule.split(sample, row) {
                LR::Left => branch.left.predict(sample, row),
                LR::Right => branch.right.predict(sample, row),
            },
            Node::Leaf(leaf) => &leaf.label,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
