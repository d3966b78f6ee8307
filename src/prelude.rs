//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use resokerr::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`], [`trace!`]
//! - **Types**: [`Outcome`], [`MessageTrace`], [`Severity`], [`Fields`], [`UnwrapError`]
//! - **Traits**: [`ToDict`], [`FromDict`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use resokerr::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .map_err(|e| e.to_string())
//!         .traced_with(|_| trace!(error, "invalid port {:?}", raw))
//! }
//!
//! let dict = parse_port("http").to_dict().unwrap();
//! assert_eq!(dict["status"], "err");
//! assert_eq!(dict["trace"]["text"], "invalid port \"http\"");
//! ```

// Macros
pub use crate::{fields, trace};

// Core types
pub use crate::types::{Dict, Fields, MessageTrace, Outcome, Severity, UnwrapError};

// Traits
pub use crate::traits::{FromDict, ResultExt, ToDict};
