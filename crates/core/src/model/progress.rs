use std::collections::HashSet;

use thiserror::Error;

use crate::model::catalog::Catalog;
use crate::model::ids::TaskId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("task {id} is not part of the catalog")]
    InvalidTaskId { id: TaskId },
}

/// Outcome of a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The task was not done before and now awards its points.
    Newly { points: u32 },
    /// The task was already done; nothing changed.
    AlreadyCompleted,
}

/// Derived view over a `ProgressState` and its catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub total_count: usize,
    pub earned_points: u32,
    pub total_points: u32,
    pub completion_ratio: f64,
}

impl ProgressSummary {
    /// Completion ratio as a whole percentage, rounded to nearest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.completion_ratio * 100.0).round() as u32
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total_count.saturating_sub(self.completed_count)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_count == self.total_count
    }
}

/// Set of completed task ids for one session.
///
/// Starts empty and only ever grows: there is no way to un-complete a task.
/// Every operation takes the catalog explicitly so ids are always checked
/// against the tasks that actually exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    completed: HashSet<TaskId>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a task as completed.
    ///
    /// Completing an already-completed task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidTaskId` if `id` is not in `catalog`; the
    /// state is left untouched.
    pub fn complete(&mut self, catalog: &Catalog, id: TaskId) -> Result<Completion, ProgressError> {
        let task = catalog.get(id).ok_or(ProgressError::InvalidTaskId { id })?;
        if self.completed.insert(id) {
            Ok(Completion::Newly {
                points: task.points(),
            })
        } else {
            Ok(Completion::AlreadyCompleted)
        }
    }

    /// # Errors
    ///
    /// Returns `ProgressError::InvalidTaskId` if `id` is not in `catalog`.
    pub fn is_completed(&self, catalog: &Catalog, id: TaskId) -> Result<bool, ProgressError> {
        if !catalog.contains(id) {
            return Err(ProgressError::InvalidTaskId { id });
        }
        Ok(self.completed.contains(&id))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self, catalog: &Catalog) -> ProgressSummary {
        let completed = catalog
            .tasks()
            .iter()
            .filter(|task| self.completed.contains(&task.id()));
        let (completed_count, earned_points) =
            completed.fold((0_usize, 0_u32), |(count, points), task| {
                (count + 1, points.saturating_add(task.points()))
            });
        let total_count = catalog.len();
        let completion_ratio = if total_count == 0 {
            0.0
        } else {
            completed_count as f64 / total_count as f64
        };

        ProgressSummary {
            completed_count,
            total_count,
            earned_points,
            total_points: catalog.total_points(),
            completion_ratio,
        }
    }
}
