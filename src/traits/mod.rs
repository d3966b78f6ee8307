//! Core traits for serialization and lifting.
//!
//! - [`ToDict`]: produces the validated plain-mapping form of a value
//! - [`FromDict`]: rebuilds a value from a mapping after validating it
//! - [`ResultExt`]: lifts a `core::result::Result` into an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use resokerr::traits::{FromDict, ResultExt, ToDict};
//! use resokerr::{MessageTrace, Outcome};
//!
//! let parsed: Result<u8, String> = "300".parse::<u8>().map_err(|e| e.to_string());
//! let outcome: Outcome<u8, String> = parsed.traced(MessageTrace::error("reading port"));
//!
//! let dict = outcome.to_dict().unwrap();
//! let back = Outcome::<u8, String>::from_dict(&dict).unwrap();
//! assert_eq!(back, outcome);
//! ```

pub mod result_ext;
pub mod to_dict;

pub use result_ext::ResultExt;
pub use to_dict::{FromDict, ToDict};
