//! Shared error types for the services crate.

use thiserror::Error;

use quest_core::model::{CertificateError, ProgressError};

/// Errors emitted by `QuestService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}
