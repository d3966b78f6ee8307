//! Extension trait for lifting `Result` values into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use resokerr::traits::ResultExt;
//! use resokerr::{MessageTrace, Outcome};
//!
//! fn load_config() -> Outcome<String, std::io::ErrorKind> {
//!     std::fs::read_to_string("config.toml")
//!         .map_err(|e| e.kind())
//!         .traced(MessageTrace::error("loading configuration file"))
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::types::{MessageTrace, Outcome};

/// Extension trait for turning `Result` values into outcomes.
///
/// The cause is attached only on the `Err` path; [`traced_with`](ResultExt::traced_with)
/// builds it lazily so the success path allocates nothing.
pub trait ResultExt<T, E> {
    /// Converts without attaching any trace.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts, attaching `cause` when the result is an `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resokerr::traits::ResultExt;
    /// use resokerr::MessageTrace;
    ///
    /// let result: Result<(), &str> = Err("failed");
    /// let outcome = result.traced(MessageTrace::error("performing operation"));
    /// assert!(outcome.has_errors());
    /// ```
    fn traced(self, cause: MessageTrace) -> Outcome<T, E>;

    /// Converts, building the cause from the error only when there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use resokerr::traits::ResultExt;
    /// use resokerr::MessageTrace;
    ///
    /// let user_id = 42;
    /// let result: Result<(), &str> = Err("not found");
    /// let outcome = result.traced_with(|e| {
    ///     MessageTrace::error(format!("user {}: {}", user_id, e))
    /// });
    /// assert_eq!(outcome.trace().unwrap().text(), "user 42: not found");
    /// ```
    fn traced_with<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&E) -> MessageTrace;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[inline]
    fn traced(self, cause: MessageTrace) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::err_with(error, cause),
        }
    }

    #[inline]
    fn traced_with<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&E) -> MessageTrace,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(error) => {
                let cause = f(&error);
                Outcome::err_with(error, cause)
            },
        }
    }
}
