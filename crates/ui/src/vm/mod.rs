mod certificate_vm;
mod nav_vm;
mod progress_vm;
mod resource_vm;
mod results_vm;
mod task_vm;
mod time_fmt;
mod toast_vm;

pub use certificate_vm::{CertificateVm, map_certificate};
pub use nav_vm::{NavItemVm, map_nav_items};
pub use progress_vm::{ProgressVm, map_progress};
pub use resource_vm::{ResourceGroupVm, ResourceLinkVm, map_resource_groups};
pub use results_vm::{ResultRowVm, map_result_rows};
pub use task_vm::{TaskCardVm, map_task_cards};
pub use toast_vm::{ToastState, ToastVm};
