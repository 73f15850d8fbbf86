mod home;
mod resources;
mod results;
mod state;
mod tasks;
mod toast;

pub use home::HomeView;
pub use resources::ResourcesView;
pub use results::{ResultsView, issue_certificate};
pub use state::ViewError;
pub use tasks::{TasksView, complete_task};
pub use toast::Toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
