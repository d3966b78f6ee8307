//! Structural checks for dict forms.
//!
//! Everything here is crate-private. Consumers reach validated data through
//! `to_dict()` / `unwrap_dict()` and `from_dict()`, which run these checks on
//! every dict they produce or accept.
pub(crate) mod shape;

pub(crate) use self::shape::{to_checked_dict, validate_shape, Shape};
