//! This file defines the split rule for the decision tree.

use crate::common::type_and_struct::Threshold;
use crate::Sample;

/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}

/// The predicate `feature[column] <= threshold`.
/// Rows satisfying it go left, all others go right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Splitter {
    pub(crate) column: usize,
    pub(crate) threshold: Threshold,
}

impl Splitter {
    #[inline]
    pub(crate) fn new(column: usize, threshold: Threshold) -> Self {
        Self { column, threshold }
    }

    /// Defines the splitting.
    #[inline]
    pub(crate) fn split(&self, sample: &Sample, row: usize) -> LR {
        self.split_value(sample.value(row, self.column))
    }

    #[inline]
    pub(crate) fn split_value(&self, value: f64) -> LR {
        if value <= self.threshold.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}
