#![warn(missing_docs)]

//! `cartree` grows CART-style binary decision trees over labeled
//! tabular data, using Gini impurity as the split criterion.
//!
//! The per-feature split search runs concurrently, one worker per
//! feature column, and the two subtrees below every branch are grown
//! in parallel as well.
//!
//! ```
//! use cartree::{DecisionTree, Example, Sample};
//!
//! let sample = Sample::from_examples(vec![
//!     Example::new(vec![1.0], "A"),
//!     Example::new(vec![2.0], "A"),
//!     Example::new(vec![9.0], "B"),
//!     Example::new(vec![10.0], "B"),
//! ])?;
//!
//! let tree = DecisionTree::new().max_depth(1).fit(&sample);
//! assert_eq!(tree.label_for(&[3.0]), "A");
//! assert_eq!(tree.label_for(&[7.0]), "B");
//! # Ok::<(), cartree::DataError>(())
//! ```

mod common;

pub mod classifier;
pub mod sample;
pub mod tree;

pub use classifier::Classifier;
pub use sample::{DataError, Example, Sample};
pub use tree::{
    majority_class, DTreeClassifier, DecisionTree, Node, DEFAULT_MAX_DEPTH, UNLABELED,
};
