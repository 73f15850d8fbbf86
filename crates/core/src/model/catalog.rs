use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::TaskId;
use crate::model::task::{Category, Task};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one task")]
    Empty,

    #[error("task id {id} appears more than once")]
    DuplicateId { id: TaskId },
}

/// Fixed, ordered list of the quest's tasks.
///
/// A catalog is built once at startup and has no mutators; ids are unique
/// for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tasks: Vec<Task>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateId` when two tasks share an id.
    pub fn new(tasks: Vec<Task>) -> Result<Self, CatalogError> {
        if tasks.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(CatalogError::DuplicateId { id: task.id() });
            }
        }
        Ok(Self { tasks })
    }

    /// The Art & Literature Quest task list.
    #[must_use]
    pub fn reference() -> Self {
        let tasks = vec![
            Task::trusted(
                1,
                "Famous Artists Quiz",
                "Match the artists with their famous works",
                10,
                Category::Quiz,
            ),
            Task::trusted(
                2,
                "Literary Terms",
                "Identify and explain key literary devices",
                15,
                Category::Writing,
            ),
            Task::trusted(
                3,
                "Art Movement Timeline",
                "Arrange art movements in chronological order",
                10,
                Category::Sorting,
            ),
            Task::trusted(
                4,
                "Shakespeare Analysis",
                "Analyze a passage from Romeo and Juliet",
                20,
                Category::Analysis,
            ),
            Task::trusted(
                5,
                "Virtual Museum Tour",
                "Explore the British Museum and answer questions",
                15,
                Category::Interactive,
            ),
        ];
        Self { tasks }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always false for a constructed catalog; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.tasks.iter().map(Task::points).sum()
    }
}
