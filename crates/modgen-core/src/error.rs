//! The error type every public operation of this crate returns.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Malformed descriptor entries never end up here; they are skipped where
/// they are read. Only real failures (I/O, rendering, invalid names at the
/// entry points) propagate through this type.
#[derive(Debug, Error, Clone)]
pub enum ModgenError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// A broken invariant inside modgen itself.
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

pub type ModgenResult<T> = Result<T, ModgenError>;

/// Descriptors and options are plain string-keyed data, so failing to
/// serialize them is a bug.
impl From<serde_json::Error> for ModgenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal {
            message: format!("JSON serialization failed: {e}"),
        }
    }
}

/// Coarse classification used by front ends to pick exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input was rejected.
    Validation,
    NotFound,
    Configuration,
    Internal,
}

impl ModgenError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["Please report it together with the command you ran".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}
