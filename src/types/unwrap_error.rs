use core::fmt::{self, Display};

use crate::types::alloc_type::{String, ToString};
use crate::types::trace_formatter::TraceFormatBuilder;
use crate::types::{MessageTrace, ValidationError};

/// Returned by [`Outcome::unwrap`](crate::Outcome::unwrap) on an `Err`.
///
/// Carries the original error payload and the complete cause chain, so the
/// caller can render a full diagnostic without re-deriving it.
///
/// # Examples
///
/// ```
/// use resokerr::{MessageTrace, Outcome};
///
/// let err = Outcome::<(), _>::err_with("disk full", MessageTrace::error("write failed"))
///     .unwrap()
///     .unwrap_err();
///
/// assert_eq!(*err.error(), "disk full");
/// assert_eq!(err.cause().map(MessageTrace::text), Some("write failed"));
/// assert_eq!(
///     err.to_string(),
///     "called `unwrap` on an `Err` outcome: disk full -> [error] write failed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrapError<E> {
    error: E,
    cause: Option<MessageTrace>,
}

impl<E> UnwrapError<E> {
    #[inline]
    pub(crate) fn new(error: E, cause: Option<MessageTrace>) -> Self {
        Self { error, cause }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub fn cause(&self) -> Option<&MessageTrace> {
        self.cause.as_ref()
    }

    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    #[inline]
    pub fn into_parts(self) -> (E, Option<MessageTrace>) {
        (self.error, self.cause)
    }
}

impl<E: Display> UnwrapError<E> {
    /// Returns a builder rendering the error followed by its cause chain.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> TraceFormatBuilder<'_> {
        TraceFormatBuilder::headed(&self.error, self.cause.as_ref())
    }

    /// `error -> cause -> ...` on a single line.
    #[must_use]
    pub fn error_chain(&self) -> String {
        self.fmt().to_string()
    }
}

impl<E: Display> Display for UnwrapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return write!(f, "called `unwrap` on an `Err` outcome: {}", self.fmt());
        }
        write!(f, "called `unwrap` on an `Err` outcome:\n{}", self.fmt().cascaded())
    }
}

impl<E> core::error::Error for UnwrapError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Returned by [`Outcome::unwrap_dict`](crate::Outcome::unwrap_dict).
#[derive(Debug, Clone, PartialEq)]
pub enum UnwrapDictError<E> {
    /// The outcome was an `Err`.
    Unwrap(UnwrapError<E>),
    /// The outcome was `Ok` but its dict form could not be produced.
    Invalid(ValidationError),
}

impl<E> UnwrapDictError<E> {
    /// The unwrap failure, if that is what happened.
    #[must_use]
    pub fn as_unwrap(&self) -> Option<&UnwrapError<E>> {
        match self {
            Self::Unwrap(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl<E> From<UnwrapError<E>> for UnwrapDictError<E> {
    #[inline]
    fn from(error: UnwrapError<E>) -> Self {
        Self::Unwrap(error)
    }
}

impl<E> From<ValidationError> for UnwrapDictError<E> {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error)
    }
}

impl<E: Display> Display for UnwrapDictError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unwrap(err) => Display::fmt(err, f),
            Self::Invalid(err) => Display::fmt(err, f),
        }
    }
}

impl<E> core::error::Error for UnwrapDictError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Unwrap(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}
