//! Plain-mapping serialization contract.
//!
//! [`ToDict`] is the single supported way to obtain the serialized form of a
//! trace or outcome. Every dict it returns has passed the crate's structural
//! checks, and every dict accepted by [`FromDict`] is checked before any field
//! is trusted.

use crate::types::{Dict, ValidationError};

/// Types with a validated dict form.
pub trait ToDict {
    /// Serializes `self` into a fresh, validated mapping.
    ///
    /// Each call returns a new mapping; mutating it does not affect `self`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a payload cannot be serialized or
    /// the result does not have the expected shape.
    fn to_dict(&self) -> Result<Dict, ValidationError>;
}

/// Types that can be rebuilt from their dict form.
pub trait FromDict: Sized {
    /// Validates `dict` and rebuilds the value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending key.
    fn from_dict(dict: &Dict) -> Result<Self, ValidationError>;
}
