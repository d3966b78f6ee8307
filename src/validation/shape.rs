use serde::Serialize;
use serde_json::Value;

use crate::types::alloc_type::{String, ToString};
use crate::types::{Dict, Severity, ValidationError};

/// Which dict schema a mapping is expected to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `{status, value | error, trace}`
    Outcome,
    /// `{severity, text, metadata, details, cause}`
    Trace,
}

/// Checks `dict` against the schema selected by `shape`.
///
/// Nested traces (`trace`, `cause`) are checked recursively.
pub(crate) fn validate_shape(dict: &Dict, shape: Shape) -> Result<(), ValidationError> {
    match shape {
        Shape::Outcome => validate_outcome(dict, ""),
        Shape::Trace => validate_trace(dict, ""),
    }
}

/// Serializes `value` and checks the resulting object before handing it out.
pub(crate) fn to_checked_dict<S>(value: &S, shape: Shape) -> Result<Dict, ValidationError>
where
    S: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(dict) => {
            validate_shape(&dict, shape)?;
            Ok(dict)
        },
        _ => Err(ValidationError::WrongKind { path: "$".to_string(), expected: "an object" }),
    }
}

fn validate_outcome(dict: &Dict, prefix: &str) -> Result<(), ValidationError> {
    let status = match dict.get("status") {
        Some(Value::String(status)) => status.as_str(),
        Some(_) => {
            return Err(ValidationError::WrongKind {
                path: join(prefix, "status"),
                expected: "a string",
            })
        },
        None => return Err(ValidationError::MissingKey { path: join(prefix, "status") }),
    };

    let (payload, opposite) = match status {
        "ok" => ("value", "error"),
        "err" => ("error", "value"),
        other => return Err(ValidationError::InvalidStatus(other.to_string())),
    };

    if !dict.contains_key(payload) {
        return Err(ValidationError::MissingKey { path: join(prefix, payload) });
    }
    if dict.contains_key(opposite) {
        return Err(ValidationError::ConflictingPayload { path: join(prefix, opposite) });
    }

    match dict.get("metadata") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {},
        Some(_) => {
            return Err(ValidationError::WrongKind {
                path: join(prefix, "metadata"),
                expected: "an object or null",
            })
        },
    }

    match dict.get("trace") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(trace)) => validate_trace(trace, &join(prefix, "trace")),
        Some(_) => Err(ValidationError::WrongKind {
            path: join(prefix, "trace"),
            expected: "an object or null",
        }),
    }
}

/// Walks the cause chain iteratively; `depth` counts `cause` hops below `prefix`.
fn validate_trace(dict: &Dict, prefix: &str) -> Result<(), ValidationError> {
    let mut current = dict;
    let mut depth = 0;
    loop {
        validate_entry(current, prefix, depth)?;
        match current.get("cause") {
            None | Some(Value::Null) => return Ok(()),
            Some(Value::Object(cause)) => {
                current = cause;
                depth += 1;
            },
            Some(_) => {
                return Err(ValidationError::WrongKind {
                    path: path_at(prefix, depth, "cause"),
                    expected: "an object or null",
                })
            },
        }
    }
}

fn validate_entry(dict: &Dict, prefix: &str, depth: usize) -> Result<(), ValidationError> {
    match dict.get("severity") {
        Some(Value::String(severity)) => {
            if severity.parse::<Severity>().is_err() {
                return Err(ValidationError::InvalidSeverity {
                    value: severity.clone(),
                    path: path_at(prefix, depth, "severity"),
                });
            }
        },
        Some(_) => {
            return Err(ValidationError::WrongKind {
                path: path_at(prefix, depth, "severity"),
                expected: "a string",
            })
        },
        None => {
            return Err(ValidationError::MissingKey { path: path_at(prefix, depth, "severity") })
        },
    }

    match dict.get("text") {
        Some(Value::String(_)) => {},
        Some(_) => {
            return Err(ValidationError::WrongKind {
                path: path_at(prefix, depth, "text"),
                expected: "a string",
            })
        },
        None => return Err(ValidationError::MissingKey { path: path_at(prefix, depth, "text") }),
    }

    for key in ["code", "stack_trace"] {
        match dict.get(key) {
            None | Some(Value::Null) | Some(Value::String(_)) => {},
            Some(_) => {
                return Err(ValidationError::WrongKind {
                    path: path_at(prefix, depth, key),
                    expected: "a string or null",
                })
            },
        }
    }

    for key in ["metadata", "details"] {
        match dict.get(key) {
            None | Some(Value::Null) | Some(Value::Object(_)) => {},
            Some(_) => {
                return Err(ValidationError::WrongKind {
                    path: path_at(prefix, depth, key),
                    expected: "an object or null",
                })
            },
        }
    }
    Ok(())
}

/// `prefix` followed by `depth` `cause` segments and `key`, dotted.
fn path_at(prefix: &str, depth: usize, key: &str) -> String {
    let mut path = String::with_capacity(prefix.len() + depth * 6 + key.len() + 1);
    path.push_str(prefix);
    for _ in 0..depth {
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str("cause");
    }
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(key);
    path
}

fn join(prefix: &str, key: &str) -> String {
    path_at(prefix, 0, key)
}
