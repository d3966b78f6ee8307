//! Success/failure sum type with an attached message trace.
//!
//! [`Outcome`] replaces panic-driven control flow: producers decide between
//! [`Outcome::ok`] and [`Outcome::err`], consumers transform with
//! [`map`](Outcome::map) / [`flat_map`](Outcome::flat_map) and extract with the
//! `unwrap` family, which never panics.
//!
//! An `Ok` never reports a hard error. Any trace attached to a [`Success`] has
//! its `Error` entries rewritten to `Warning`, on construction and on every
//! later attachment.

use core::fmt::Display;

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::traits::{FromDict, ToDict};
use crate::types::alloc_type::{String, ToString};
use crate::types::trace_formatter::TraceFormatBuilder;
use crate::types::{
    Dict, Fields, MessageTrace, Severity, TraceVec, UnwrapDictError, UnwrapError, ValidationError,
};
use crate::validation::{to_checked_dict, validate_shape, Shape};

/// Successful half of an [`Outcome`]: a value plus optional notices.
///
/// The notice chain never contains `Error` entries.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    value: T,
    message: Option<MessageTrace>,
    metadata: Option<Fields>,
}

impl<T> Success<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value, message: None, metadata: None }
    }

    /// Creates a success carrying `message`, downgrading `Error` entries to `Warning`.
    #[inline]
    pub fn with_message(value: T, message: MessageTrace) -> Self {
        Self { value, message: Some(normalize(message)), metadata: None }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub fn message(&self) -> Option<&MessageTrace> {
        self.message.as_ref()
    }

    #[inline]
    pub fn into_parts(self) -> (T, Option<MessageTrace>) {
        (self.value, self.message)
    }

    /// Result-level metadata, separate from the entries of the notice chain.
    #[inline]
    pub fn metadata(&self) -> Option<&Fields> {
        self.metadata.as_ref()
    }

    /// Returns this success with `metadata` copied in, replacing any previous metadata.
    #[inline]
    pub fn with_metadata<F: Into<Fields>>(mut self, metadata: F) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Appends `entry` (and its causes) to the end of the notice chain.
    pub fn attach(self, entry: MessageTrace) -> Self {
        let message = match self.message {
            Some(existing) => existing.append(entry),
            None => entry,
        };
        Self { value: self.value, message: Some(normalize(message)), metadata: self.metadata }
    }

    #[inline]
    pub fn with_info<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::info(text))
    }

    #[inline]
    pub fn with_warning<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::warning(text))
    }

    #[inline]
    pub fn with_success<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::success(text))
    }

    /// Maps the value while keeping the notice chain.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Success<U>
    where
        F: FnOnce(T) -> U,
    {
        Success { value: f(self.value), message: self.message, metadata: self.metadata }
    }
}

/// Failed half of an [`Outcome`]: an error payload plus the chain explaining it.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<E> {
    error: E,
    cause: Option<MessageTrace>,
    metadata: Option<Fields>,
}

impl<E> Failure<E> {
    #[inline]
    pub fn new(error: E) -> Self {
        Self { error, cause: None, metadata: None }
    }

    #[inline]
    pub fn with_cause(error: E, cause: MessageTrace) -> Self {
        Self { error, cause: Some(cause), metadata: None }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    #[inline]
    pub fn cause(&self) -> Option<&MessageTrace> {
        self.cause.as_ref()
    }

    #[inline]
    pub fn into_parts(self) -> (E, Option<MessageTrace>) {
        (self.error, self.cause)
    }

    /// Result-level metadata, separate from the entries of the cause chain.
    #[inline]
    pub fn metadata(&self) -> Option<&Fields> {
        self.metadata.as_ref()
    }

    /// Returns this failure with `metadata` copied in, replacing any previous metadata.
    #[inline]
    pub fn with_metadata<F: Into<Fields>>(mut self, metadata: F) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Appends `entry` (and its causes) to the end of the cause chain.
    pub fn attach(self, entry: MessageTrace) -> Self {
        let cause = match self.cause {
            Some(existing) => existing.append(entry),
            None => entry,
        };
        Self { error: self.error, cause: Some(cause), metadata: self.metadata }
    }

    #[inline]
    pub fn with_error<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::error(text))
    }

    #[inline]
    pub fn with_warning<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::warning(text))
    }

    #[inline]
    pub fn with_info<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::info(text))
    }

    /// Maps the error payload while keeping the cause chain.
    #[inline]
    pub fn map_error<F, U>(self, f: F) -> Failure<U>
    where
        F: FnOnce(E) -> U,
    {
        Failure { error: f(self.error), cause: self.cause, metadata: self.metadata }
    }

    /// Converts into the error returned by a failed `unwrap`.
    #[inline]
    pub fn into_unwrap_error(self) -> UnwrapError<E> {
        UnwrapError::new(self.error, self.cause)
    }
}

impl<E: Display> Failure<E> {
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

impl<E: Display> Display for Failure<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().cascaded(), f)
    }
}

/// Either a [`Success`] or a [`Failure`], never both.
///
/// # Examples
///
/// ```
/// use resokerr::{Outcome, ToDict};
///
/// let outcome: Outcome<i32, &str> =
///     Outcome::ok(42).flat_map(|x| if x > 10 { Outcome::err("too big") } else { Outcome::ok(x) });
///
/// assert_eq!(
///     serde_json::Value::Object(outcome.to_dict().unwrap()),
///     serde_json::json!({"status": "err", "error": "too big", "trace": null})
/// );
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    Ok(Success<T>),
    Err(Failure<E>),
}

impl<T, E> Outcome<T, E> {
    /// Success with no message.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(Success::new(value))
    }

    /// Success carrying `message`; `Error` entries are downgraded to `Warning`.
    #[inline]
    pub fn ok_with(value: T, message: MessageTrace) -> Self {
        Self::Ok(Success::with_message(value, message))
    }

    /// Failure with no cause chain.
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(Failure::new(error))
    }

    /// Failure explained by `cause`.
    #[inline]
    pub fn err_with(error: E, cause: MessageTrace) -> Self {
        Self::Err(Failure::with_cause(error, cause))
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(success) => Some(success.value()),
            Self::Err(_) => None,
        }
    }

    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(failure) => Some(failure.error()),
        }
    }

    /// The message of an `Ok` or the cause of an `Err`.
    #[inline]
    pub fn trace(&self) -> Option<&MessageTrace> {
        match self {
            Self::Ok(success) => success.message(),
            Self::Err(failure) => failure.cause(),
        }
    }

    /// Result-level metadata of either variant.
    #[inline]
    pub fn metadata(&self) -> Option<&Fields> {
        match self {
            Self::Ok(success) => success.metadata(),
            Self::Err(failure) => failure.metadata(),
        }
    }

    #[must_use]
    #[inline]
    pub fn has_metadata(&self) -> bool {
        self.metadata().is_some()
    }

    /// `true` on `Ok`, which always holds a value.
    #[must_use]
    #[inline]
    pub fn has_value(&self) -> bool {
        self.is_ok()
    }

    /// `true` when a message (Ok) or cause (Err) chain is attached.
    #[must_use]
    #[inline]
    pub fn has_trace(&self) -> bool {
        self.trace().is_some()
    }

    /// Chain entries with `severity`, in chain order; empty without a trace.
    #[must_use]
    pub fn entries_with(&self, severity: Severity) -> TraceVec<'_> {
        self.trace().map(|trace| trace.entries_with(severity)).unwrap_or_default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_severity(Severity::Error)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.has_severity(Severity::Warning)
    }

    #[must_use]
    pub fn has_info(&self) -> bool {
        self.has_severity(Severity::Info)
    }

    fn has_severity(&self, severity: Severity) -> bool {
        self.trace().is_some_and(|trace| trace.has_severity(severity))
    }

    /// Appends an info entry to the message (Ok) or cause (Err) chain.
    pub fn with_info<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::info(text))
    }

    /// Appends a warning entry to the message (Ok) or cause (Err) chain.
    pub fn with_warning<S: Into<String>>(self, text: S) -> Self {
        self.attach(MessageTrace::warning(text))
    }

    /// Sets result-level metadata on either variant.
    pub fn with_metadata<F: Into<Fields>>(self, metadata: F) -> Self {
        match self {
            Self::Ok(success) => Self::Ok(success.with_metadata(metadata)),
            Self::Err(failure) => Self::Err(failure.with_metadata(metadata)),
        }
    }

    /// Appends `entry` to the chain; on `Ok` the usual downgrade applies.
    pub fn attach(self, entry: MessageTrace) -> Self {
        match self {
            Self::Ok(success) => Self::Ok(success.attach(entry)),
            Self::Err(failure) => Self::Err(failure.attach(entry)),
        }
    }

    /// Applies `f` to an `Ok` value, keeping its message. `Err` passes through
    /// and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use resokerr::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled.value(), Some(&42));
    ///
    /// let failed = Outcome::<i32, &str>::err("nope").map(|x| x * 2);
    /// assert_eq!(failed.error(), Some(&"nope"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(success) => Outcome::Ok(success.map(f)),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Applies `f` to an `Err` payload, keeping its cause chain.
    #[inline]
    pub fn map_err<U, F>(self, f: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(success) => Outcome::Ok(success),
            Self::Err(failure) => Outcome::Err(failure.map_error(f)),
        }
    }

    /// Chains a step that itself returns an outcome.
    ///
    /// On `Ok`, the outcome produced by `f` is returned as is, so the result is
    /// never nested. On `Err`, `f` is not called.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(success) => f(success.into_value()),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying the error payload and the complete
    /// cause chain when called on `Err`.
    #[inline]
    pub fn unwrap(self) -> Result<T, UnwrapError<E>> {
        match self {
            Self::Ok(success) => Ok(success.into_value()),
            Self::Err(failure) => Err(failure.into_unwrap_error()),
        }
    }

    /// Extracts the value, or returns `default` on `Err`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(success) => success.into_value(),
            Self::Err(_) => default,
        }
    }

    /// Extracts the value, or computes a fallback from the failure on `Err`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Failure<E>) -> T,
    {
        match self {
            Self::Ok(success) => success.into_value(),
            Self::Err(failure) => f(failure),
        }
    }

    /// Splits into a `Result`, keeping the trace on whichever side survives.
    #[inline]
    pub fn into_result(self) -> Result<Success<T>, Failure<E>> {
        match self {
            Self::Ok(success) => Ok(success),
            Self::Err(failure) => Err(failure),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    /// Dict form of the whole outcome when `Ok`.
    ///
    /// # Errors
    ///
    /// [`UnwrapDictError::Unwrap`] on `Err`, [`UnwrapDictError::Invalid`] when
    /// the value cannot be serialized.
    pub fn unwrap_dict(self) -> Result<Dict, UnwrapDictError<E>> {
        match self {
            Self::Ok(_) => Ok(self.to_dict()?),
            Self::Err(failure) => Err(UnwrapDictError::Unwrap(failure.into_unwrap_error())),
        }
    }

    /// Dict form of the whole outcome when `Ok`, else the serialized `default`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the outcome or the default cannot be
    /// serialized.
    pub fn unwrap_dict_or(self, default: T) -> Result<Value, ValidationError> {
        match self {
            Self::Ok(_) => Ok(Value::Object(self.to_dict()?)),
            Self::Err(_) => Ok(serde_json::to_value(&default)?),
        }
    }
}

impl<T, E> ToDict for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    /// `{status, value | error, trace}` with `trace: null` when absent, plus
    /// `metadata` when result-level metadata is set.
    fn to_dict(&self) -> Result<Dict, ValidationError> {
        to_checked_dict(self, Shape::Outcome)
    }
}

impl<T, E> FromDict for Outcome<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    fn from_dict(dict: &Dict) -> Result<Self, ValidationError> {
        validate_shape(dict, Shape::Outcome)?;

        let trace = match dict.get("trace") {
            Some(Value::Object(trace)) => Some(MessageTrace::from_dict(trace)?),
            _ => None,
        };
        let metadata = match dict.get("metadata") {
            Some(Value::Object(metadata)) => Some(Fields::from(metadata)),
            _ => None,
        };
        let ok = matches!(dict.get("status"), Some(Value::String(status)) if status == "ok");
        let key = if ok { "value" } else { "error" };
        let payload = dict
            .get(key)
            .cloned()
            .ok_or_else(|| ValidationError::MissingKey { path: key.to_string() })?;

        let outcome = match (ok, trace) {
            (true, Some(message)) => Self::ok_with(serde_json::from_value(payload)?, message),
            (true, None) => Self::ok(serde_json::from_value(payload)?),
            (false, Some(cause)) => Self::err_with(serde_json::from_value(payload)?, cause),
            (false, None) => Self::err(serde_json::from_value(payload)?),
        };
        Ok(match metadata {
            Some(metadata) => outcome.with_metadata(metadata),
            None => outcome,
        })
    }
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let metadata = self.metadata();
        let mut map = serializer.serialize_map(Some(3 + usize::from(metadata.is_some())))?;
        match self {
            Self::Ok(success) => {
                map.serialize_entry("status", "ok")?;
                map.serialize_entry("value", &success.value)?;
                map.serialize_entry("trace", &success.message)?;
            },
            Self::Err(failure) => {
                map.serialize_entry("status", "err")?;
                map.serialize_entry("error", &failure.error)?;
                map.serialize_entry("trace", &failure.cause)?;
            },
        }
        if let Some(metadata) = metadata {
            map.serialize_entry("metadata", metadata)?;
        }
        map.end()
    }
}

/// Parses the dict form and runs the same checks as [`FromDict`].
///
/// The trace nests one object per chain entry, so parsing JSON text is bounded
/// by `serde_json`'s recursion limit of 128. Outcomes whose trace is deeper
/// than about 126 entries round-trip through [`FromDict::from_dict`] only.
impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dict = Dict::deserialize(deserializer)?;
        Self::from_dict(&dict).map_err(D::Error::custom)
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    #[inline]
    fn from(success: Success<T>) -> Self {
        Self::Ok(success)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    #[inline]
    fn from(failure: Failure<E>) -> Self {
        Self::Err(failure)
    }
}

fn normalize(message: MessageTrace) -> MessageTrace {
    #[cfg(feature = "tracing")]
    crate::tracing_ext::note_downgrade(&message);
    message.downgraded()
}
