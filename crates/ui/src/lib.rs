pub mod app;
pub mod context;
pub mod layout;
pub mod vm;
pub mod views;

pub use app::{App, QuestShell};
pub use context::{AppContext, ShellState, UiApp, build_app_context};
