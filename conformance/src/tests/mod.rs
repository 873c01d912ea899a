//! Instance graphs used to exercise the validators.

pub mod fixtures;
