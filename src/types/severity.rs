use core::fmt::{self, Display};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::alloc_type::ToString;
use crate::types::ValidationError;

/// Severity of a single [`MessageTrace`](crate::MessageTrace) entry.
///
/// Serialized in lowercase: `"success"`, `"info"`, `"warning"`, `"error"`.
/// Variants are ordered by gravity, so `Severity::Error` is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Every recognized severity, least to most severe.
    pub const ALL: [Severity; 4] =
        [Severity::Success, Severity::Info, Severity::Warning, Severity::Error];

    /// Returns the lowercase wire form.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns `true` for [`Severity::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Severity permitted on an `Ok` outcome: `Error` becomes `Warning`.
    #[inline]
    pub const fn downgraded(self) -> Self {
        match self {
            Self::Error => Self::Warning,
            other => other,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSeverity {
                value: s.to_string(),
                path: "severity".to_string(),
            })
    }
}
