//! Data Validation and Normalization
//!
//! Provides token parsing, range checking, and normalization for field sensor readings.

mod error;
mod normalizer;
mod validator;

pub use error::ValidationError;
pub use normalizer::{Normalizer, DEFAULT_PRECISION};
pub use validator::{RangeConfig, Validator};
