//! Immutable causal record of diagnostic entries.
//!
//! A [`MessageTrace`] is a single entry (severity, text, optional metadata and
//! details) that exclusively owns the entry it was caused by. Following
//! `cause` links from any trace walks a finite, acyclic chain: ownership makes
//! a cycle impossible to construct.

use core::fmt::Display;
use core::iter::FusedIterator;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::traits::{FromDict, ToDict};
use crate::types::alloc_type::{Box, String, ToString, Vec};
use crate::types::trace_formatter::TraceFormatBuilder;
use crate::types::{Dict, Fields, Severity, TraceVec, ValidationError};
use crate::validation::{to_checked_dict, validate_shape, Shape};

/// One diagnostic entry plus the chain of entries that caused it.
///
/// Traces are built once and never mutated; the `with_*` builders consume the
/// trace and return a new one. Equality compares the whole chain.
///
/// Chain walks (clone, equality, drop, merge) are iterative, so chains of any
/// length are safe to build and discard.
///
/// # Examples
///
/// ```
/// use resokerr::{MessageTrace, Severity};
///
/// let trace = MessageTrace::error("write failed")
///     .with_metadata([("path", "/var/data")])
///     .with_cause(MessageTrace::warning("disk 98% full"));
///
/// assert_eq!(trace.depth(), 2);
/// assert_eq!(trace.root_cause().severity(), Severity::Warning);
/// assert_eq!(trace.to_string(), "[error] write failed -> [warning] disk 98% full");
/// ```
#[must_use]
#[derive(Debug, Serialize)]
pub struct MessageTrace {
    severity: Severity,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    metadata: Option<Fields>,
    details: Option<Fields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_trace: Option<String>,
    cause: Option<Box<MessageTrace>>,
}

impl MessageTrace {
    /// Creates a trace entry with no metadata, details or cause.
    #[inline]
    pub fn new<S: Into<String>>(severity: Severity, text: S) -> Self {
        Self {
            severity,
            text: text.into(),
            code: None,
            metadata: None,
            details: None,
            stack_trace: None,
            cause: None,
        }
    }

    /// Creates a trace entry from a severity string such as `"warning"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSeverity`] for anything other than
    /// `success`, `info`, `warning` or `error`.
    pub fn parse<S: Into<String>>(severity: &str, text: S) -> Result<Self, ValidationError> {
        Ok(Self::new(severity.parse()?, text))
    }

    #[inline]
    pub fn success<S: Into<String>>(text: S) -> Self {
        Self::new(Severity::Success, text)
    }

    #[inline]
    pub fn info<S: Into<String>>(text: S) -> Self {
        Self::new(Severity::Info, text)
    }

    #[inline]
    pub fn warning<S: Into<String>>(text: S) -> Self {
        Self::new(Severity::Warning, text)
    }

    #[inline]
    pub fn error<S: Into<String>>(text: S) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Returns this trace with `metadata` copied in, replacing any previous metadata.
    #[inline]
    pub fn with_metadata<F: Into<Fields>>(mut self, metadata: F) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Returns this trace with `details` copied in, replacing any previous details.
    #[inline]
    pub fn with_details<F: Into<Fields>>(mut self, details: F) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Returns this trace tagged with a machine-readable `code`, e.g. `"E_QUOTA"`.
    #[inline]
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns this trace carrying a captured stack trace in text form.
    #[inline]
    pub fn with_stack_trace<S: Into<String>>(mut self, stack_trace: S) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Returns this trace with `cause` as its direct cause.
    ///
    /// Any previous cause is replaced. Use [`merge`](Self::merge) to extend the
    /// chain instead.
    #[inline]
    pub fn with_cause(mut self, cause: MessageTrace) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[inline]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    #[inline]
    pub fn metadata(&self) -> Option<&Fields> {
        self.metadata.as_ref()
    }

    #[inline]
    pub fn details(&self) -> Option<&Fields> {
        self.details.as_ref()
    }

    /// Returns the direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&MessageTrace> {
        self.cause.as_deref()
    }

    /// Iterates the chain starting with this entry and ending at the root cause.
    #[inline]
    pub fn iter(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of entries in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// The last entry of the chain.
    pub fn root_cause(&self) -> &MessageTrace {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Returns `true` when any entry of the chain has `severity`.
    #[must_use]
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.iter().any(|entry| entry.severity == severity)
    }

    /// Entries of the chain with `severity`, in chain order.
    #[must_use]
    pub fn entries_with(&self, severity: Severity) -> TraceVec<'_> {
        self.iter().filter(|entry| entry.severity == severity).collect()
    }

    /// Most severe entry severity found in the chain.
    #[must_use]
    pub fn max_severity(&self) -> Severity {
        self.iter().map(|entry| entry.severity).max().unwrap_or(self.severity)
    }

    /// Returns a new trace whose chain is this one followed by `other`'s.
    ///
    /// Neither input is modified; both are copied into the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use resokerr::MessageTrace;
    ///
    /// let first = MessageTrace::info("fetched");
    /// let second = MessageTrace::warning("stale");
    /// let merged = first.merge(&second);
    ///
    /// assert_eq!(merged.depth(), 2);
    /// assert_eq!(first.depth(), 1);
    /// ```
    pub fn merge(&self, other: &MessageTrace) -> MessageTrace {
        self.clone().append(other.clone())
    }

    /// Returns a builder for customizing how the chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> TraceFormatBuilder<'_> {
        TraceFormatBuilder::new(self)
    }

    /// Formats the chain using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(TraceFormatBuilder<'_>) -> TraceFormatBuilder<'_>,
    {
        f(self.fmt()).to_string()
    }

    /// Attaches `tail` after the last entry of this chain.
    pub(crate) fn append(mut self, tail: MessageTrace) -> Self {
        let mut slot = &mut self.cause;
        while let Some(entry) = slot {
            slot = &mut entry.cause;
        }
        *slot = Some(Box::new(tail));
        self
    }

    /// Rewrites every `Error` entry of the chain to `Warning`.
    pub(crate) fn downgraded(mut self) -> Self {
        self.severity = self.severity.downgraded();
        let mut next = self.cause.as_deref_mut();
        while let Some(entry) = next {
            entry.severity = entry.severity.downgraded();
            next = entry.cause.as_deref_mut();
        }
        self
    }

    /// Copy of this entry alone, without its cause.
    fn detached(&self) -> Self {
        Self {
            severity: self.severity,
            text: self.text.clone(),
            code: self.code.clone(),
            metadata: self.metadata.clone(),
            details: self.details.clone(),
            stack_trace: self.stack_trace.clone(),
            cause: None,
        }
    }

    fn same_entry(&self, other: &Self) -> bool {
        self.severity == other.severity
            && self.text == other.text
            && self.code == other.code
            && self.metadata == other.metadata
            && self.details == other.details
            && self.stack_trace == other.stack_trace
    }

    /// Links `rest` behind `head`, in order.
    fn linked(mut head: Self, mut rest: Vec<Self>) -> Self {
        let mut chain: Option<Box<Self>> = None;
        while let Some(mut entry) = rest.pop() {
            entry.cause = chain;
            chain = Some(Box::new(entry));
        }
        head.cause = chain;
        head
    }

    fn from_checked(dict: &Dict) -> Result<Self, ValidationError> {
        let head = Self::entry_from_checked(dict)?;
        let mut rest = Vec::new();
        let mut next = cause_of(dict);
        while let Some(dict) = next {
            rest.push(Self::entry_from_checked(dict)?);
            next = cause_of(dict);
        }
        Ok(Self::linked(head, rest))
    }

    fn entry_from_checked(dict: &Dict) -> Result<Self, ValidationError> {
        let severity = match dict.get("severity") {
            Some(Value::String(severity)) => severity.parse()?,
            _ => return Err(ValidationError::MissingKey { path: "severity".to_string() }),
        };
        let text = match dict.get("text") {
            Some(Value::String(text)) => text.clone(),
            _ => return Err(ValidationError::MissingKey { path: "text".to_string() }),
        };

        let mut trace = Self::new(severity, text);
        trace.code = string_of(dict, "code");
        trace.stack_trace = string_of(dict, "stack_trace");
        if let Some(Value::Object(metadata)) = dict.get("metadata") {
            trace.metadata = Some(Fields::from(metadata));
        }
        if let Some(Value::Object(details)) = dict.get("details") {
            trace.details = Some(Fields::from(details));
        }
        Ok(trace)
    }
}

fn cause_of(dict: &Dict) -> Option<&Dict> {
    match dict.get("cause") {
        Some(Value::Object(cause)) => Some(cause),
        _ => None,
    }
}

fn string_of(dict: &Dict, key: &str) -> Option<String> {
    match dict.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None,
    }
}

impl Clone for MessageTrace {
    fn clone(&self) -> Self {
        Self::linked(self.detached(), self.iter().skip(1).map(Self::detached).collect())
    }
}

impl PartialEq for MessageTrace {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) if a.same_entry(b) => {},
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Drop for MessageTrace {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(mut entry) = next {
            next = entry.cause.take();
        }
    }
}

impl ToDict for MessageTrace {
    /// `{severity, text, metadata, details, cause}` with `null` for absent keys.
    ///
    /// `code` and `stack_trace` appear only when set. The dict nests one level
    /// per chain entry.
    fn to_dict(&self) -> Result<Dict, ValidationError> {
        to_checked_dict(self, Shape::Trace)
    }
}

impl FromDict for MessageTrace {
    fn from_dict(dict: &Dict) -> Result<Self, ValidationError> {
        validate_shape(dict, Shape::Trace)?;
        Self::from_checked(dict)
    }
}

/// Parses the dict form and runs the same checks as [`FromDict`].
///
/// The dict form nests one object per chain entry, so parsing JSON text is
/// bounded by `serde_json`'s recursion limit of 128: chains deeper than about
/// 127 entries serialize to text but fail to parse back. Use
/// [`FromDict::from_dict`] on an in-memory [`Dict`] for deeper chains.
impl<'de> Deserialize<'de> for MessageTrace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dict = Dict::deserialize(deserializer)?;
        Self::from_dict(&dict).map_err(D::Error::custom)
    }
}

impl Display for MessageTrace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().cascaded(), f)
    }
}

impl<'a> IntoIterator for &'a MessageTrace {
    type Item = &'a MessageTrace;
    type IntoIter = Chain<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a cause chain, outermost entry first.
///
/// Created by [`MessageTrace::iter`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a MessageTrace>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a MessageTrace;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
