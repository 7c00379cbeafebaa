//! Error taxonomy of the import pipeline

use std::error::Error as _;
use std::fmt;

use crate::api::ApiError;

/// Which reference list a lookup ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Vacancy,
    Status,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Vacancy => write!(f, "vacancy"),
            LookupKind::Status => write!(f, "status"),
        }
    }
}

/// Error raised by one of the import stages
///
/// Only [`ImportError::ReferenceData`] aborts a batch; every other variant is
/// scoped to the record that produced it.
#[derive(Debug)]
pub enum ImportError {
    /// Account, vacancy list or status list could not be fetched
    ReferenceData {
        what: &'static str,
        source: ApiError,
    },
    /// A position or status name has no counterpart in the reference data
    LookupMiss { kind: LookupKind, name: String },
    /// Résumé upload failed
    Upload(ApiError),
    /// Full name does not hold at least a last and a first name
    InvalidName(String),
    /// Applicant creation failed
    Submission(ApiError),
    /// Vacancy/status assignment failed; the applicant already exists remotely
    Assignment(ApiError),
    /// A derived record field was written twice or read before being set
    Record(String),
}

impl ImportError {
    /// Whether the error must stop the whole batch
    pub fn is_fatal(&self) -> bool {
        matches!(self, ImportError::ReferenceData { .. })
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::ReferenceData { what, source } => {
                write!(f, "failed to fetch {}: {}", what, source)
            }
            ImportError::LookupMiss { kind, name } => {
                write!(f, "no {} named '{}' exists in the account", kind, name)
            }
            ImportError::Upload(err) => write!(f, "résumé upload failed: {}", err),
            ImportError::InvalidName(name) => write!(
                f,
                "full name '{}' must contain at least a last and a first name",
                name
            ),
            ImportError::Submission(err) => write!(f, "applicant creation failed: {}", err),
            ImportError::Assignment(err) => write!(f, "vacancy assignment failed: {}", err),
            ImportError::Record(msg) => write!(f, "record state error: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // the wrapped `ApiError` is part of `Display`
        match self {
            ImportError::ReferenceData { source, .. } => source.source(),
            ImportError::Upload(err)
            | ImportError::Submission(err)
            | ImportError::Assignment(err) => err.source(),
            ImportError::LookupMiss { .. }
            | ImportError::InvalidName(_)
            | ImportError::Record(_) => None,
        }
    }
}
