//! Small wrapper types shared across the crate.

pub(crate) mod type_and_struct;
