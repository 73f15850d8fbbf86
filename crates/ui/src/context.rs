use std::sync::Arc;

use dioxus::prelude::{Signal, use_context_provider};
use quest_core::model::ResourceLibrary;
use services::QuestService;

use crate::views::ViewError;
use crate::vm::{CertificateVm, ToastState};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quest_title(&self) -> String;

    /// Fresh session for this window. Called once when the shell mounts.
    fn start_session(&self) -> QuestService;

    fn resources(&self) -> Arc<ResourceLibrary>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    resources: Arc<ResourceLibrary>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        let resources = app.resources();
        Self { app, resources }
    }

    #[must_use]
    pub fn quest_title(&self) -> String {
        self.app.quest_title()
    }

    #[must_use]
    pub fn start_session(&self) -> QuestService {
        let session = self.app.start_session();
        tracing::debug!(section = %session.current_section(), "session started");
        session
    }

    #[must_use]
    pub fn resources(&self) -> Arc<ResourceLibrary> {
        Arc::clone(&self.resources)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Session state shared by every view of the shell.
pub type QuestSignal = Signal<QuestService>;

/// Toast slot shared by the views that can raise one.
pub type ToastSignal = Signal<ToastState>;

/// Outcome of the last "Download Certificate" request.
pub type CertificateSignal = Signal<Option<Result<CertificateVm, ViewError>>>;

/// Signals owned by the shell; they outlive every section view.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub quest: QuestSignal,
    pub toast: ToastSignal,
    pub certificate: CertificateSignal,
}

/// Create the shell signals and provide them to every descendant.
pub fn use_shell_state(ctx: &AppContext) -> ShellState {
    let quest: QuestSignal = use_context_provider(|| Signal::new(ctx.start_session()));
    let toast: ToastSignal = use_context_provider(|| Signal::new(ToastState::default()));
    let certificate: CertificateSignal = use_context_provider(|| Signal::new(None));
    use_context_provider(|| ShellState {
        quest,
        toast,
        certificate,
    })
}
