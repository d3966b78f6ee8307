//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt outcomes incrementally:
//! lift results produced by other libraries, and flatten outcomes back into
//! plain results at API boundaries that do not care about traces.
//!
//! # Examples
//!
//! ```
//! use resokerr::convert::*;
//! use resokerr::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let outcome: Outcome<i32, &str> = Outcome::err("failed").with_info("while parsing");
//! assert_eq!(outcome_to_result(outcome), Err("failed"));
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{Failure, MessageTrace, Outcome, Success, UnwrapError};

/// Converts a `Result` into an `Outcome` with no trace.
///
/// # Examples
///
/// ```
/// use resokerr::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("failed"));
/// assert_eq!(outcome.error(), Some(&"failed"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    result.into()
}

/// Flattens an `Outcome` into a plain `Result`, discarding the trace.
///
/// # Examples
///
/// ```
/// use resokerr::{convert::outcome_to_result, MessageTrace, Outcome};
///
/// let outcome: Outcome<i32, &str> = Outcome::ok_with(7, MessageTrace::info("cached"));
/// assert_eq!(outcome_to_result(outcome), Ok(7));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    match outcome {
        Outcome::Ok(success) => Ok(success.into_value()),
        Outcome::Err(failure) => Err(failure.into_error()),
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<Success<T>, Failure<E>> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<E> From<Failure<E>> for UnwrapError<E> {
    #[inline]
    fn from(failure: Failure<E>) -> Self {
        failure.into_unwrap_error()
    }
}

/// Collects outcomes, stopping at the first `Err`.
///
/// Messages of the collected `Ok` values are merged in iteration order onto the
/// resulting `Ok`. The first failure is returned unchanged.
///
/// # Examples
///
/// ```
/// use resokerr::{MessageTrace, Outcome};
///
/// let all: Outcome<Vec<i32>, &str> = vec![
///     Outcome::ok(1),
///     Outcome::ok_with(2, MessageTrace::warning("rounded")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(all.value(), Some(&vec![1, 2]));
/// assert!(all.has_warnings());
///
/// let failed: Outcome<Vec<i32>, &str> =
///     vec![Outcome::ok(1), Outcome::err("bad row"), Outcome::ok(3)].into_iter().collect();
/// assert_eq!(failed.error(), Some(&"bad row"));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failure: Option<Failure<E>> = None;
        let mut notices: Vec<MessageTrace> = Vec::new();

        let values: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Ok(success) => {
                    let (value, notice) = success.into_parts();
                    notices.extend(notice);
                    Some(value)
                },
                Outcome::Err(err) => {
                    failure = Some(err);
                    None
                },
            })
            .collect();

        if let Some(failure) = failure {
            return Outcome::Err(failure);
        }
        match link_notices(notices) {
            Some(message) => Outcome::ok_with(values, message),
            None => Outcome::ok(values),
        }
    }
}

/// Chains `notices` in order, touching each entry once.
fn link_notices(notices: Vec<MessageTrace>) -> Option<MessageTrace> {
    notices.into_iter().rev().fold(None, |chain, notice| {
        Some(match chain {
            Some(rest) => notice.append(rest),
            None => notice,
        })
    })
}
