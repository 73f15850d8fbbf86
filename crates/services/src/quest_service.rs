use std::sync::Arc;

use quest_core::model::{
    Catalog, Certificate, Completion, Navigator, ProgressState, ProgressSummary, Section, Task,
    TaskId,
};
use tracing::{debug, info, warn};

use crate::Clock;
use crate::error::QuestError;

/// What the UI should announce after a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionNotice {
    Earned {
        task_id: TaskId,
        points: u32,
        title: String,
        description: String,
    },
    Unchanged,
}

impl CompletionNotice {
    fn earned(task_id: TaskId, points: u32) -> Self {
        Self::Earned {
            task_id,
            points,
            title: "Task Completed! 🎉".to_string(),
            description: format!("You've earned {points} points!"),
        }
    }
}

/// A catalog task paired with its completion flag for this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStatus {
    pub task: Task,
    pub completed: bool,
}

/// One in-memory quest session: the catalog, what has been completed and
/// which section is on screen.
#[derive(Debug, Clone)]
pub struct QuestService {
    clock: Clock,
    catalog: Arc<Catalog>,
    progress: ProgressState,
    navigator: Navigator,
}

impl QuestService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            clock: Clock::default(),
            catalog,
            progress: ProgressState::new(),
            navigator: Navigator::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_start_section(mut self, section: Section) -> Self {
        self.navigator = Navigator::with_start(section);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn current_section(&self) -> Section {
        self.navigator.current()
    }

    pub fn navigate(&mut self, section: Section) {
        let previous = self.navigator.navigate(section);
        debug!(from = %previous, to = %section, "navigate");
    }

    /// Mark a task as done and describe what the student earned.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::Progress` if `id` is not part of the catalog.
    pub fn complete_task(&mut self, id: TaskId) -> Result<CompletionNotice, QuestError> {
        let outcome = self.progress.complete(&self.catalog, id).map_err(|err| {
            warn!(task_id = %id, "rejected completion of unknown task");
            err
        })?;

        match outcome {
            Completion::Newly { points } => {
                let summary = self.summary();
                info!(
                    task_id = %id,
                    points,
                    earned = summary.earned_points,
                    completed = summary.completed_count,
                    total = summary.total_count,
                    "task completed"
                );
                Ok(CompletionNotice::earned(id, points))
            }
            Completion::AlreadyCompleted => {
                debug!(task_id = %id, "task already completed");
                Ok(CompletionNotice::Unchanged)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `QuestError::Progress` if `id` is not part of the catalog.
    pub fn is_completed(&self, id: TaskId) -> Result<bool, QuestError> {
        Ok(self.progress.is_completed(&self.catalog, id)?)
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.progress.summary(&self.catalog)
    }

    /// Catalog tasks in order, each with its completion flag.
    #[must_use]
    pub fn task_statuses(&self) -> Vec<TaskStatus> {
        self.catalog
            .tasks()
            .iter()
            .map(|task| TaskStatus {
                task: task.clone(),
                completed: self
                    .progress
                    .is_completed(&self.catalog, task.id())
                    .unwrap_or(false),
            })
            .collect()
    }

    /// # Errors
    ///
    /// Returns `QuestError::Certificate` while tasks remain.
    pub fn certificate(&self) -> Result<Certificate, QuestError> {
        let cert = Certificate::issue(&self.summary(), self.clock.now())?;
        info!(points = cert.earned_points(), "certificate issued");
        Ok(cert)
    }
}
