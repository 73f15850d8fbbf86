mod catalog;
mod certificate;
mod ids;
mod progress;
mod resource;
mod section;
mod task;

pub use ids::{ParseIdError, TaskId};

pub use catalog::{Catalog, CatalogError};
pub use certificate::{Certificate, CertificateError};
pub use progress::{Completion, ProgressError, ProgressState, ProgressSummary};
pub use resource::{ResourceError, ResourceGroup, ResourceLibrary, ResourceLink, ResourceTab};
pub use section::{Navigator, ParseSectionError, Section};
pub use task::{Category, Task, TaskError};
