use core::fmt::{self, Display};

use crate::types::alloc_type::String;

/// Malformed trace input or dict form.
///
/// Returned when a severity string is not recognized, or when a dict produced
/// by (or fed into) the serialization layer does not have the expected shape.
/// Paths are dotted from the dict root, e.g. `trace.cause.severity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Severity string is not one of `success`, `info`, `warning`, `error`.
    InvalidSeverity { value: String, path: String },
    /// Outcome `status` is not `ok` or `err`.
    InvalidStatus(String),
    /// A required key is absent.
    MissingKey { path: String },
    /// A key holds a value of the wrong JSON kind.
    WrongKind { path: String, expected: &'static str },
    /// An outcome dict carries the payload key of the opposite variant.
    ConflictingPayload { path: String },
    /// A payload could not be converted to or from its JSON form.
    Serialization(String),
}

impl ValidationError {
    /// Dotted path of the offending key, when the error concerns one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidSeverity { path, .. }
            | Self::MissingKey { path }
            | Self::WrongKind { path, .. }
            | Self::ConflictingPayload { path } => Some(path.as_str()),
            Self::InvalidStatus(_) | Self::Serialization(_) => None,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeverity { value, path } => write!(
                f,
                "key '{}' has invalid severity '{}' (expected one of: success, info, warning, error)",
                path, value
            ),
            Self::InvalidStatus(value) => {
                write!(f, "invalid status '{}' (expected 'ok' or 'err')", value)
            },
            Self::MissingKey { path } => write!(f, "missing required key '{}'", path),
            Self::WrongKind { path, expected } => {
                write!(f, "key '{}' must be {}", path, expected)
            },
            Self::ConflictingPayload { path } => {
                write!(f, "key '{}' does not belong to this status", path)
            },
            Self::Serialization(message) => write!(f, "serialization failed: {}", message),
        }
    }
}

impl core::error::Error for ValidationError {}

impl From<serde_json::Error> for ValidationError {
    fn from(error: serde_json::Error) -> Self {
        use crate::types::alloc_type::ToString;
        Self::Serialization(error.to_string())
    }
}
