//! Defines the classifier trait.

use crate::Sample;

/// A trained model that assigns a class label to each row of a sample.
pub trait Classifier {
    /// The predicted label for the `row`-th example of `sample`.
    fn predict<'a>(&'a self, sample: &Sample, row: usize) -> &'a str;

    /// Predicted labels for every row of `sample`, in row order.
    fn predict_all(&self, sample: &Sample) -> Vec<&str> {
        let (n_sample, _) = sample.shape();
        (0..n_sample).map(|row| self.predict(sample, row)).collect()
    }
}
