//! Outcome and trace types.
//!
//! This module provides the [`Outcome`] sum type, its [`Success`] and
//! [`Failure`] halves, and the immutable [`MessageTrace`] chain both of them
//! carry.
//!
//! # Examples
//!
//! ```
//! use resokerr::{MessageTrace, Outcome, Severity};
//!
//! let outcome: Outcome<(), &str> = Outcome::err_with(
//!     "connection refused",
//!     MessageTrace::error("handshake failed").with_metadata([("port", 5432)]),
//! );
//!
//! assert!(outcome.has_errors());
//! assert_eq!(outcome.trace().map(MessageTrace::severity), Some(Severity::Error));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod displayed;
pub mod fields;
pub mod message_trace;
pub mod outcome;
pub mod severity;
pub mod trace_formatter;
pub mod unwrap_error;
pub mod validation_error;

pub use displayed::*;
pub use fields::*;
pub use message_trace::*;
pub use outcome::*;
pub use severity::*;
pub use unwrap_error::*;
pub use validation_error::*;

/// Plain nested mapping produced by `to_dict()`.
pub type Dict = serde_json::Map<alloc_type::String, serde_json::Value>;

/// SmallVec-backed collection of borrowed chain entries.
///
/// Uses inline storage for up to 4 entries; most cause chains are shorter.
pub type TraceVec<'a> = SmallVec<[&'a MessageTrace; 4]>;
