//! Ergonomic macros for building [`MessageTrace`](crate::MessageTrace) entries
//! and [`Fields`](crate::Fields) maps.
//!
//! - [`macro@crate::trace`] - Formats a trace entry of the given severity.
//! - [`macro@crate::fields`] - Builds a metadata/details map from `key => value`
//!   pairs, where each value is any serializable expression. Serialization
//!   failures are returned as errors.
//!
//! # Examples
//!
//! ```
//! use resokerr::{fields, trace, Outcome, Severity};
//!
//! let attempt = 3;
//! let outcome: Outcome<(), &str> = Outcome::err_with(
//!     "upstream timeout",
//!     trace!(error, "giving up after {} attempts", attempt)
//!         .with_metadata(fields! { "attempt" => attempt, "hosts" => ["a", "b"] }?),
//! );
//!
//! let cause = outcome.trace().unwrap();
//! assert_eq!(cause.severity(), Severity::Error);
//! assert_eq!(cause.text(), "giving up after 3 attempts");
//! assert_eq!(cause.metadata().unwrap().get("attempt"), Some(&3.into()));
//! # Ok::<(), resokerr::ValidationError>(())
//! ```

/// Creates a [`MessageTrace`](crate::MessageTrace) with a formatted text.
///
/// The first argument is the severity as a lowercase identifier: `success`,
/// `info`, `warning` or `error`. The rest is passed to `format!`.
///
/// # Examples
///
/// ```
/// use resokerr::{trace, Severity};
///
/// let user_id = 42;
/// let entry = trace!(warning, "user {} has no email", user_id);
/// assert_eq!(entry.severity(), Severity::Warning);
/// assert_eq!(entry.text(), "user 42 has no email");
/// ```
#[macro_export]
macro_rules! trace {
    ($severity:ident, $($arg:tt)+) => {
        $crate::MessageTrace::$severity($crate::__private::format!($($arg)+))
    };
}

/// Builds a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// Each value is serialized to a JSON value, so arrays, maps and numbers all
/// work. Evaluates to `Result<Fields, ValidationError>`.
///
/// # Errors
///
/// [`ValidationError::Serialization`](crate::ValidationError::Serialization)
/// when a value has no JSON form, such as a map with non-string keys.
///
/// # Examples
///
/// ```
/// use resokerr::fields;
///
/// let f = fields! { "retry" => 3, "host" => "db-1", "tags" => ["primary"] }?;
/// assert_eq!(f.len(), 3);
/// assert_eq!(f.get("host").and_then(|v| v.as_str()), Some("db-1"));
///
/// let empty = fields! {}?;
/// assert!(empty.is_empty());
/// # Ok::<(), resokerr::ValidationError>(())
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::__private::Result::<$crate::Fields, $crate::ValidationError>::Ok($crate::Fields::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$($crate::__private::serialized_entry($key, &$value)),+]
            .into_iter()
            .collect::<$crate::__private::Result<$crate::Fields, $crate::ValidationError>>()
    };
}
