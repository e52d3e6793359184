//! Error types for memberwise.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Unknown member names are never errors; see the access layer.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for memberwise operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an out-of-range error for a value that does not fit `target`.
    #[must_use]
    pub fn out_of_range(value: impl fmt::Display, target: &'static str) -> Self {
        Self::new(ErrorKind::OutOfRange {
            value: value.to_string(),
            target,
        })
    }

    /// Creates an unsupported shape error.
    #[must_use]
    pub fn unsupported_shape(record: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedShape {
            record,
            reason: reason.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if a value was not assignable to a member.
    ///
    /// Covers both a wrong type and a number outside the member's range.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::TypeMismatch { .. } | ErrorKind::OutOfRange { .. }
        )
    }

    /// Returns true if this is an unsupported shape error.
    #[must_use]
    pub const fn is_unsupported_shape(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedShape { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value is not assignable to a member's declared type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The declared member type.
        expected: Type,
        /// The type of the supplied value.
        actual: Type,
    },

    /// A number of the right type that the member's Rust type cannot hold.
    #[error("value {value} out of range for {target}")]
    OutOfRange {
        /// The rejected value.
        value: String,
        /// Rust type of the member.
        target: &'static str,
    },

    /// A type cannot be described as a record at all.
    #[error("unsupported record shape {record}: {reason}")]
    UnsupportedShape {
        /// Name of the rejected type.
        record: &'static str,
        /// Why the type was rejected.
        reason: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the record type being accessed.
    pub record: Option<&'static str>,
    /// Member being read or written.
    pub member: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record type.
    #[must_use]
    pub fn with_record(mut self, record: &'static str) -> Self {
        self.record = Some(record);
        self
    }

    /// Sets the member name.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.record, &self.member) {
            (Some(record), Some(member)) => write!(f, "at {record}.{member}"),
            (Some(record), None) => write!(f, "at {record}"),
            (None, Some(member)) => write!(f, "at member {member}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type for memberwise operations.
pub type Result<T> = std::result::Result<T, Error>;
