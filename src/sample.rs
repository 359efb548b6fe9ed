//! Tabular training data: labeled examples, CSV loading,
//! synthetic data generation, and the boundary error type.

mod error;
mod sample_struct;

pub use error::DataError;
pub use sample_struct::{Example, Sample};
