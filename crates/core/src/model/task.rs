use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TaskId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TaskError {
    #[error("task id must be > 0")]
    ZeroId,

    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task {id} must award at least one point")]
    ZeroPoints { id: TaskId },
}

/// Kind of activity a task asks for. Shown as a badge, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Quiz,
    Writing,
    Sorting,
    Analysis,
    Interactive,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Quiz => "quiz",
            Category::Writing => "writing",
            Category::Sorting => "sorting",
            Category::Analysis => "analysis",
            Category::Interactive => "interactive",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work in the quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    points: u32,
    category: Category,
}

impl Task {
    /// Build a validated task.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::ZeroId` for id 0, `TaskError::EmptyTitle` for a blank
    /// title and `TaskError::ZeroPoints` when the task awards nothing.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        points: u32,
        category: Category,
    ) -> Result<Self, TaskError> {
        if id.value() == 0 {
            return Err(TaskError::ZeroId);
        }
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if points == 0 {
            return Err(TaskError::ZeroPoints { id });
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            points,
            category,
        })
    }

    /// Built-in catalog entries, already known to be valid.
    pub(crate) fn trusted(
        id: u32,
        title: &str,
        description: &str,
        points: u32,
        category: Category,
    ) -> Self {
        Self {
            id: TaskId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            points,
            category,
        }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}
