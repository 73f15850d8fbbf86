use thiserror::Error;

use crate::model::{CatalogError, CertificateError, ProgressError, ResourceError, TaskError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}
