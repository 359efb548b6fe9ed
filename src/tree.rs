//! Decision-tree induction: the split rule, the Gini criterion with
//! its concurrent best-split search, the node representation, the
//! recursive builder, and the trained classifier.

mod criterion;
mod dtree;
mod dtree_classifier;
mod node;
mod split_rule;

pub use dtree::{majority_class, DecisionTree, DEFAULT_MAX_DEPTH, UNLABELED};
pub use dtree_classifier::DTreeClassifier;
pub use node::{BranchNode, LeafNode, Node};
