use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::Rng;

use super::error::DataError;

/// A single labeled example: a fixed-length feature vector
/// together with a class label.
///
/// Examples are immutable once loaded. During training they are only
/// ever regrouped by index, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    features: Vec<f64>,
    label: String,
}

impl Example {
    /// Construct an example from its feature vector and class label.
    #[inline]
    pub fn new<S: Into<String>>(features: Vec<f64>, label: S) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }

    /// The feature vector.
    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// The class label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Struct `Sample` holds a rectangular batch of labeled examples.
///
/// Construction validates that every example carries the same number
/// of features and that every value is finite, so the tree builder
/// can assume a well-formed matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    examples: Vec<Example>,
    n_feature: usize,
}

impl Sample {
    /// Build a `Sample` from in-memory examples.
    ///
    /// The feature count is taken from the first example; an empty
    /// vector yields a valid empty sample with zero features.
    pub fn from_examples(examples: Vec<Example>) -> Result<Self, DataError> {
        let n_feature = examples.first().map(|e| e.features.len()).unwrap_or(0);

        for (row, example) in examples.iter().enumerate() {
            if example.features.len() != n_feature {
                return Err(DataError::RaggedRow {
                    row,
                    expected: n_feature,
                    found: example.features.len(),
                });
            }
            if let Some(column) = example.features.iter().position(|x| !x.is_finite()) {
                return Err(DataError::BadValue {
                    row,
                    column,
                    value: example.features[column].to_string(),
                });
            }
        }

        Ok(Self {
            examples,
            n_feature,
        })
    }

    /// Read a CSV file into a `Sample`.
    ///
    /// Every column but the last is parsed as an `f64` feature;
    /// the last column is the class label.
    pub fn from_path<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Self, DataError> {
        let file = File::open(path)?;
        Self::from_reader(file, has_header)
    }

    /// Read CSV records from any reader. See [`Sample::from_path`].
    pub fn from_reader<R: Read>(reader: R, has_header: bool) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut examples = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() < 2 {
                return Err(DataError::NoFeatures);
            }

            let n = record.len() - 1;
            let mut features = Vec::with_capacity(n);
            for (column, field) in record.iter().take(n).enumerate() {
                let x = field.parse::<f64>().map_err(|_| DataError::BadValue {
                    row,
                    column,
                    value: field.to_string(),
                })?;
                features.push(x);
            }

            let label = record.get(n).unwrap_or("").to_string();
            examples.push(Example::new(features, label));
        }

        Self::from_examples(examples)
    }

    /// Generate a synthetic sample: `n_feature` uniform values in
    /// `[0, 10)` per example, labels alternating between `"ClassB"`
    /// (even rows) and `"ClassA"` (odd rows).
    pub fn synthetic<R: Rng>(n_sample: usize, n_feature: usize, rng: &mut R) -> Self {
        let examples = (0..n_sample)
            .map(|i| {
                let features = (0..n_feature)
                    .map(|_| rng.gen_range(0.0..10.0))
                    .collect::<Vec<f64>>();
                let label = if i % 2 == 0 { "ClassB" } else { "ClassA" };
                Example::new(features, label)
            })
            .collect();

        Self {
            examples,
            n_feature,
        }
    }

    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.n_feature)
    }

    /// The value of feature `column` for the `row`-th example.
    #[inline]
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.examples[row].features[column]
    }

    /// The class label of the `row`-th example.
    #[inline]
    pub fn label(&self, row: usize) -> &str {
        &self.examples[row].label
    }

    /// All examples, in load order.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Returns the `row`-th instance `(x, y)`.
    #[inline]
    pub fn at(&self, row: usize) -> (&[f64], &str) {
        let example = &self.examples[row];
        (example.features(), example.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Sample::from_examples(vec![
            Example::new(vec![1.0, 2.0], "a"),
            Example::new(vec![1.0], "b"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            DataError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = Sample::from_examples(vec![Example::new(vec![1.0, f64::NAN], "a")])
            .unwrap_err();

        assert!(matches!(err, DataError::BadValue { row: 0, column: 1, .. }));
    }

    #[test]
    fn empty_sample_is_valid() {
        let sample = Sample::from_examples(Vec::new()).unwrap();
        assert_eq!(sample.shape(), (0, 0));
    }

    #[test]
    fn csv_with_header() {
        let csv = b"sepal,petal,class\n1.0, 2.0,setosa\n3.5,4.5,versicolor\n";
        let sample = Sample::from_reader(&csv[..], true).unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.at(0), (&[1.0, 2.0][..], "setosa"));
        assert_eq!(sample.label(1), "versicolor");
    }

    #[test]
    fn csv_with_unparsable_feature() {
        let csv = b"1.0,oops,a\n";
        let err = Sample::from_reader(&csv[..], false).unwrap_err();

        assert!(matches!(err, DataError::BadValue { row: 0, column: 1, .. }));
    }

    #[test]
    fn csv_with_unequal_record_lengths() {
        let csv = b"1.0,2.0,a\n1.0,b\n";
        let err = Sample::from_reader(&csv[..], false).unwrap_err();

        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn csv_without_feature_columns() {
        let csv = b"a\nb\n";
        let err = Sample::from_reader(&csv[..], false).unwrap_err();

        assert!(matches!(err, DataError::NoFeatures));
    }

    #[test]
    fn synthetic_labels_alternate() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0);
        let sample = Sample::synthetic(4, 3, &mut rng);

        assert_eq!(sample.shape(), (4, 3));
        assert_eq!(sample.label(0), "ClassB");
        assert_eq!(sample.label(1), "ClassA");
        assert!((0..4).all(|i| {
            sample.examples()[i]
                .features()
                .iter()
                .all(|&x| (0.0..10.0).contains(&x))
        }));
    }
}
