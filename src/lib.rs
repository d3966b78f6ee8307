//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `resokerr::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Outcomes with a Message Trace
//!
//! ```
//! use resokerr::Outcome;
//!
//! let outcome: Outcome<u32, &str> = Outcome::ok(21)
//!     .with_info("loaded from cache")
//!     .map(|x| x * 2);
//!
//! assert_eq!(outcome.value(), Some(&42));
//! assert!(outcome.has_info());
//! ```
//!
//! ## Failures Carry Their Cause Chain
//!
//! ```
//! use resokerr::{MessageTrace, Outcome};
//!
//! let outcome: Outcome<(), &str> = Outcome::err_with(
//!     "disk full",
//!     MessageTrace::error("write failed").with_cause(MessageTrace::info("quota is 10GiB")),
//! );
//!
//! let err = outcome.unwrap().unwrap_err();
//! assert_eq!(*err.error(), "disk full");
//! assert_eq!(err.error_chain(), "disk full -> [error] write failed -> [info] quota is 10GiB");
//! ```
//!
//! ## Dict Serialization
//!
//! ```
//! use resokerr::{MessageTrace, Outcome, ToDict};
//!
//! let outcome: Outcome<i32, &str> = Outcome::ok_with(1, MessageTrace::error("x"));
//! let dict = outcome.to_dict().unwrap();
//!
//! // Ok never reports hard errors: the entry was downgraded on attach.
//! assert_eq!(dict["trace"]["severity"], "warning");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and `core::result::Result`
pub mod convert;
/// Macros for building traces and field maps
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Serialization and lifting traits
pub mod traits;
/// Outcome, MessageTrace and their error types
pub mod types;

/// `tracing` integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Structural checks over dict forms.
mod validation;

pub use convert::*;
pub use traits::*;
pub use types::{
    trace_formatter::{TraceFormatBuilder, TraceFormatConfig, TraceFormatter},
    Chain, Dict, Displayed, Failure, Fields, MessageTrace, Outcome, Severity, Success, TraceVec,
    UnwrapDictError, UnwrapError, ValidationError,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
    pub use core::result::Result;

    pub use crate::types::fields::serialized_entry;
}
