use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quest_core::model::{Catalog, ResourceLibrary, Section, TaskId};
use quest_core::time::fixed_clock;
use services::QuestService;

use crate::app::ShellFrame;
use crate::context::{ShellState, UiApp, build_app_context, use_shell_state};
use crate::views::{complete_task, issue_certificate};

pub const TEST_QUEST_TITLE: &str = "Art and Literature Quest";

struct TestApp {
    start: Section,
    completed: Vec<TaskId>,
    catalog: Arc<Catalog>,
    resources: Arc<ResourceLibrary>,
}

impl UiApp for TestApp {
    fn quest_title(&self) -> String {
        TEST_QUEST_TITLE.to_string()
    }

    fn start_session(&self) -> QuestService {
        let mut session = QuestService::new(Arc::clone(&self.catalog))
            .with_clock(fixed_clock())
            .with_start_section(self.start);
        for id in &self.completed {
            session.complete_task(*id).expect("catalog task");
        }
        session
    }

    fn resources(&self) -> Arc<ResourceLibrary> {
        Arc::clone(&self.resources)
    }
}

#[derive(Clone, Default)]
struct ShellHandles {
    shell: Rc<RefCell<Option<ShellState>>>,
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    handles: ShellHandles,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Same wiring as `QuestShell`, but hands the shell signals to the test.
#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(app));
    let shell = use_shell_state(&ctx);
    *props.handles.shell.borrow_mut() = Some(shell);
    rsx! { ShellFrame {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: ShellHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn shell(&self) -> ShellState {
        let shell = *self.handles.shell.borrow();
        shell.expect("shell registered")
    }

    /// Same path as pressing "Start Task" on a card.
    pub fn complete(&mut self, id: u32) {
        let shell = self.shell();
        self.dom
            .in_runtime(|| complete_task(shell, TaskId::new(id)));
        drive_dom(&mut self.dom);
    }

    pub fn navigate(&mut self, section: Section) {
        let mut quest = self.shell().quest;
        self.dom.in_runtime(|| quest.write().navigate(section));
        drive_dom(&mut self.dom);
    }

    /// Same path as pressing "Download Certificate".
    pub fn issue_certificate(&mut self) {
        let shell = self.shell();
        self.dom
            .in_runtime(|| issue_certificate(shell, TEST_QUEST_TITLE));
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks run until `duration` of (tokio) time has passed.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        for _ in 0..64 {
            if tokio::time::timeout_at(deadline, self.dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            drive_dom(&mut self.dom);
        }
        drive_dom(&mut self.dom);
    }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Shell opened on `start` with the given tasks already completed.
pub fn setup_shell(start: Section, completed: &[u32]) -> ViewHarness {
    let app = Arc::new(TestApp {
        start,
        completed: completed.iter().copied().map(TaskId::new).collect(),
        catalog: Arc::new(Catalog::reference()),
        resources: Arc::new(ResourceLibrary::reference().expect("reference resources")),
    });
    let handles = ShellHandles::default();
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ShellHarness,
            ShellHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}
