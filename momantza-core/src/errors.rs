//! # Errors
//!
//! Structured errors for tenancy. Core goals:
//! - consistent status codes + class names
//! - can be carried through anyhow::Error (lookups return `anyhow::Result`)
//! - transport-agnostic (momantza-axum decides how to serialize)
//!
//! Feature `serde` adds the `to_json()` helper.

use std::fmt;

use anyhow::Error as AnyError;

/// Error class names + status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,     // 404
    GeneralError, // 500
    Unavailable,  // 503
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::GeneralError => 500,
            ErrorKind::Unavailable => 503,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::GeneralError => "GeneralError",
            ErrorKind::Unavailable => "Unavailable",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::GeneralError => "general-error",
            ErrorKind::Unavailable => "unavailable",
        }
    }
}

/// A structured error that can live inside `anyhow::Error`.
///
/// A lookup collaborator that cannot reach its store should fail with
/// [`TenancyError::unavailable`]; a missing tenant in a handler is
/// [`TenancyError::not_found`].
#[derive(Debug)]
pub struct TenancyError {
    pub kind: ErrorKind,
    pub message: String,
    pub source: Option<AnyError>,
}

impl TenancyError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Find a `TenancyError` anywhere in an `anyhow` context chain.
    pub fn find_in(err: &AnyError) -> Option<&TenancyError> {
        err.chain().find_map(|e| e.downcast_ref::<TenancyError>())
    }

    /// Copy suitable for returning to clients: drops the inner `source`.
    pub fn sanitize_for_client(&self) -> TenancyError {
        TenancyError {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, msg)
    }
}

impl fmt::Display for TenancyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for TenancyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl TenancyError {
    /// `{name, message, code, className}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "message": self.message,
            "code": self.code(),
            "className": self.class_name(),
        })
    }
}
