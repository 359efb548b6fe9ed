//! Defines the recursive decision tree builder.

use super::criterion::{self, LabelToCount};
use super::dtree_classifier::DTreeClassifier;
use super::node::{BranchNode, LeafNode, Node};
use super::split_rule::LR;
use crate::common::type_and_struct::Depth;
use crate::Sample;

/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// The label assigned to a leaf grown from an empty partition.
pub const UNLABELED: &str = "unknown";

/// Struct `DecisionTree` keeps the hyperparameters for growing a tree.
///
/// # Example
///
/// ```
/// use cartree::{DecisionTree, Sample};
///
/// let sample = Sample::from_reader(&b"1.0,a\n9.0,b\n"[..], false)?;
/// let tree = DecisionTree::new().max_depth(2).fit(&sample);
/// assert_eq!(tree.depth(), 1);
/// # Ok::<(), cartree::DataError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    max_depth: Depth,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Construct a builder with the default maximal depth.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_depth: Depth::from(DEFAULT_MAX_DEPTH),
        }
    }

    /// Specify the maximal depth of the tree.
    /// Default maximal depth is [`DEFAULT_MAX_DEPTH`].
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);
        self
    }

    /// Grow a tree over `sample`.
    ///
    /// Deterministic for a fixed sample and depth, regardless of how
    /// the concurrent split search is scheduled. An empty sample
    /// yields a single leaf labeled [`UNLABELED`].
    pub fn fit(&self, sample: &Sample) -> DTreeClassifier {
        let (n_sample, _) = sample.shape();
        let indices = (0..n_sample).collect::<Vec<usize>>();

        let root = grow(sample, indices, self.max_depth);
        DTreeClassifier::from(root)
    }
}

/// Grow the subtree over the examples selected by `indices`.
fn grow(sample: &Sample, indices: Vec<usize>, depth: Depth) -> Node {
    let counts = tally(sample, &indices);
    let label = majority_label(&counts);

    // Exhausted depth, an empty partition, and an already-pure
    // partition all terminate here.
    if depth.is_exhausted() || criterion::gini_impurity(&counts, indices.len()) == 0.0 {
        return Node::Leaf(LeafNode::from_raw(label));
    }

    let Some(rule) = criterion::best_split(sample, &indices) else {
        return Node::Leaf(LeafNode::from_raw(label));
    };

    let mut lindices = Vec::new();
    let mut rindices = Vec::new();
    for i in indices {
        match rule.split(sample, i) {
            LR::Left => lindices.push(i),
            LR::Right => rindices.push(i),
        }
    }

    // A candidate threshold always lies strictly between two observed
    // values, but guard the one-sided partition anyway.
    if lindices.is_empty() || rindices.is_empty() {
        return Node::Leaf(LeafNode::from_raw(label));
    }

    // The two partitions are disjoint, so the subtrees grow in
    // parallel without sharing mutable state.
    let depth = depth - 1;
    let (left, right) = rayon::join(
        || grow(sample, lindices, depth),
        || grow(sample, rindices, depth),
    );

    Node::Branch(BranchNode::from_raw(rule, Box::new(left), Box::new(right)))
}

/// Tally the class labels of the given rows and return the most
/// frequent one.
///
/// Ties break toward the lexicographically smallest label; an empty
/// `indices` yields [`UNLABELED`]. Never fails.
pub fn majority_class(sample: &Sample, indices: &[usize]) -> String {
    majority_label(&tally(sample, indices))
}

fn tally<'a>(sample: &'a Sample, indices: &[usize]) -> LabelToCount<'a> {
    let mut counts = LabelToCount::new();
    for &i in indices {
        *counts.entry(sample.label(i)).or_insert(0) += 1;
    }
    counts
}

fn majority_label(counts: &LabelToCount<'_>) -> String {
    counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| UNLABELED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Example;

    fn labeled(labels: &[&str]) -> Sample {
        let examples = labels
            .iter()
            .enumerate()
            .map(|(i, y)| Example::new(vec![i as f64], *y))
            .collect();
        Sample::from_examples(examples).unwrap()
    }

    #[test]
    fn majority_of_empty_input_is_the_sentinel() {
        let sample = labeled(&[]);
        assert_eq!(majority_class(&sample, &[]), UNLABELED);
    }

    #[test]
    fn majority_picks_the_most_frequent_label() {
        let sample = labeled(&["b", "a", "b"]);
        assert_eq!(majority_class(&sample, &[0, 1, 2]), "b");
    }

    #[test]
    fn majority_ties_break_lexicographically() {
        let sample = labeled(&["b", "a"]);
        assert_eq!(majority_class(&sample, &[0, 1]), "a");

        let sample = labeled(&["c", "b", "a", "b", "c"]);
        assert_eq!(majority_class(&sample, &[0, 1, 2, 3, 4]), "b");
    }

    #[test]
    fn majority_respects_the_index_subset() {
        let sample = labeled(&["a", "b", "b"]);
        assert_eq!(majority_class(&sample, &[0]), "a");
    }
}
