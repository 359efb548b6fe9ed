//! Gini impurity and the concurrent best-split search.

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use super::split_rule::Splitter;
use crate::common::type_and_struct::Threshold;
use crate::Sample;

/// Class-occurrence counts for one side of a candidate split.
/// Rebuilt per evaluation, never persisted.
pub(crate) type LabelToCount<'a> = HashMap<&'a str, usize>;

/// Score of a splitting.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
struct Score(f64);

impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    /// Gini scores are always finite, so `total_cmp` is an
    /// ordinary numeric order here.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// The best threshold found for one feature column.
#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    column: usize,
    threshold: Threshold,
    score: Score,
}

/// Returns the Gini impurity `1 - sum p^2` of the given counts,
/// where each `p` is a count relative to `total`.
/// An empty partition (`total == 0`) has impurity `0.0`.
#[inline]
pub(crate) fn gini_impurity(counts: &LabelToCount<'_>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let correct = counts
        .values()
        .map(|&count| (count as f64 / total).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}

/// The count-weighted mean of the two sides' Gini impurities.
#[inline]
fn weighted_gini(
    left: &LabelToCount<'_>,
    n_left: usize,
    right: &LabelToCount<'_>,
    n_right: usize,
) -> f64 {
    let total = (n_left + n_right) as f64;
    if total == 0.0 {
        return 0.0;
    }

    let lp = n_left as f64 / total;
    let rp = n_right as f64 / total;

    lp * gini_impurity(left, n_left) + rp * gini_impurity(right, n_right)
}

/// Scan one feature column for the threshold minimizing the weighted
/// Gini impurity over `indices`.
///
/// Candidate thresholds are the midpoints of adjacent values in the
/// column-sorted order; class counts are swept along that order so
/// each candidate is evaluated in O(1) instead of a full re-scan.
/// Equal adjacent values produce no candidate, since their midpoint
/// induces the same partition as the end of the value run.
///
/// Returns `None` when fewer than 2 examples exist or the column is
/// constant over `indices`.
fn split_on_column(sample: &Sample, indices: &[usize], column: usize) -> Option<SplitCandidate> {
    if indices.len() < 2 {
        return None;
    }

    // Each column worker sorts its own permutation of the indices.
    // The example store itself is never reordered, so concurrent
    // workers cannot race on it.
    let mut order = indices.to_vec();
    order.sort_by(|&i, &j| sample.value(i, column).total_cmp(&sample.value(j, column)));

    let mut left = LabelToCount::new();
    let mut n_left = 0_usize;
    let mut n_right = order.len();
    let mut right = LabelToCount::new();
    for &i in &order {
        *right.entry(sample.label(i)).or_insert(0) += 1;
    }

    let mut best: Option<(Score, Threshold)> = None;

    for pair in order.windows(2) {
        let (prev, next) = (pair[0], pair[1]);

        // Move `prev` from the right side to the left side.
        let label = sample.label(prev);
        *left.entry(label).or_insert(0) += 1;
        n_left += 1;
        n_right -= 1;
        if let Some(count) = right.get_mut(label) {
            *count -= 1;
            if *count == 0 {
                right.remove(label);
            }
        }

        let lo = sample.value(prev, column);
        let hi = sample.value(next, column);
        if lo == hi {
            continue;
        }

        let threshold = Threshold::from((lo + hi) / 2.0);
        let score = Score::from(weighted_gini(&left, n_left, &right, n_right));

        // Strict `<`: among equal scores the first candidate of the
        // ascending sweep wins.
        match best {
            Some((best_score, _)) if score >= best_score => {}
            _ => best = Some((score, threshold)),
        }
    }

    best.map(|(score, threshold)| SplitCandidate {
        column,
        threshold,
        score,
    })
}

/// Runs [`split_on_column`] for every feature column concurrently and
/// folds the per-column winners to the global minimum.
///
/// Ties on the score break toward the lowest column index, so the
/// result does not depend on worker completion order. Returns `None`
/// when no column yields a candidate.
pub(crate) fn best_split(sample: &Sample, indices: &[usize]) -> Option<Splitter> {
    let (_, n_feature) = sample.shape();

    (0..n_feature)
        .into_par_iter()
        .filter_map(|column| split_on_column(sample, indices, column))
        .min_by(|a, b| a.score.cmp(&b.score).then_with(|| a.column.cmp(&b.column)))
        .map(|candidate| Splitter::new(candidate.column, candidate.threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Example;

    fn labeled(rows: &[(&[f64], &str)]) -> Sample {
        let examples = rows
            .iter()
            .map(|(x, y)| Example::new(x.to_vec(), *y))
            .collect();
        Sample::from_examples(examples).unwrap()
    }

    fn counts<'a>(pairs: &[(&'a str, usize)]) -> LabelToCount<'a> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn gini_of_pure_partition_is_zero() {
        assert_eq!(gini_impurity(&counts(&[("a", 7)]), 7), 0.0);
    }

    #[test]
    fn gini_of_even_two_class_partition_is_half() {
        assert_eq!(gini_impurity(&counts(&[("a", 5), ("b", 5)]), 10), 0.5);
    }

    #[test]
    fn gini_of_empty_partition_is_zero() {
        assert_eq!(gini_impurity(&LabelToCount::new(), 0), 0.0);
    }

    #[test]
    fn midpoint_of_the_class_gap_wins() {
        let sample = labeled(&[
            (&[1.0], "A"),
            (&[2.0], "A"),
            (&[9.0], "B"),
            (&[10.0], "B"),
        ]);
        let indices = [0, 1, 2, 3];

        let rule = best_split(&sample, &indices).unwrap();
        assert_eq!(rule.column, 0);
        assert_eq!(rule.threshold, 5.5);
    }

    #[test]
    fn equal_scores_break_toward_the_lowest_column() {
        // Both columns separate the classes perfectly at 5.5.
        let sample = labeled(&[
            (&[1.0, 1.0], "A"),
            (&[2.0, 2.0], "A"),
            (&[9.0, 9.0], "B"),
            (&[10.0, 10.0], "B"),
        ]);
        let indices = [0, 1, 2, 3];

        let rule = best_split(&sample, &indices).unwrap();
        assert_eq!(rule.column, 0);
    }

    #[test]
    fn fewer_than_two_examples_yield_no_candidate() {
        let sample = labeled(&[(&[1.0], "A")]);

        assert!(best_split(&sample, &[0]).is_none());
        assert!(best_split(&sample, &[]).is_none());
    }

    #[test]
    fn constant_columns_yield_no_candidate() {
        let sample = labeled(&[
            (&[3.0, 3.0], "A"),
            (&[3.0, 3.0], "B"),
            (&[3.0, 3.0], "A"),
        ]);

        assert!(best_split(&sample, &[0, 1, 2]).is_none());
    }

    #[test]
    fn search_respects_the_index_subset() {
        let sample = labeled(&[
            (&[1.0], "A"),
            (&[2.0], "A"),
            (&[9.0], "B"),
            (&[100.0], "B"),
        ]);

        // Without row 3 the gap moves, but the winner is still the
        // midpoint between the two classes.
        let rule = best_split(&sample, &[0, 1, 2]).unwrap();
        assert_eq!(rule.threshold, 5.5);
    }
}
