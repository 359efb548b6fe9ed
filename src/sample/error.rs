use thiserror::Error;

/// Errors reported while loading or validating a dataset.
///
/// All of these surface before training starts; once a [`Sample`]
/// exists, tree induction itself cannot fail.
///
/// [`Sample`]: crate::Sample
#[derive(Debug, Error)]
pub enum DataError {
    /// The underlying reader failed.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer rejected the input.
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// A row whose feature vector length differs from the first row's.
    #[error("row {row} has {found} feature values, expected {expected}")]
    RaggedRow {
        /// Zero-based row index of the offending example.
        row: usize,
        /// Feature count established by the first row.
        expected: usize,
        /// Feature count actually found.
        found: usize,
    },

    /// A feature value that does not parse as a finite number.
    #[error("row {row}, column {column}: `{value}` is not a finite number")]
    BadValue {
        /// Zero-based row index of the offending value.
        row: usize,
        /// Zero-based column index of the offending value.
        column: usize,
        /// The rejected text.
        value: String,
    },

    /// A record too short to hold at least one feature and a label.
    #[error("each record needs at least one feature column and a label column")]
    NoFeatures,
}
