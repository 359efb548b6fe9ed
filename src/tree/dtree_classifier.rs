//! Defines the trained decision tree classifier.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::node::Node;
use crate::classifier::Classifier;
use crate::Sample;

/// A trained decision tree.
/// This struct is just a wrapper of the root [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub struct DTreeClassifier {
    root: Node,
}

impl From<Node> for DTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl DTreeClassifier {
    /// The root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The number of edges on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// The class label for a single feature vector.
    ///
    /// `features` must have the arity the tree was trained on.
    #[inline]
    pub fn label_for<'a>(&'a self, features: &[f64]) -> &'a str {
        self.root.label_for(features)
    }

    /// Write the current decision tree to a Graphviz dot file.
    pub fn to_dot_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        for row in self.root.to_dot_info(0).0 {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        Ok(())
    }
}

impl Classifier for DTreeClassifier {
    #[inline]
    fn predict<'a>(&'a self, sample: &Sample, row: usize) -> &'a str {
        self.root.predict(sample, row)
    }
}

impl fmt::Display for DTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
