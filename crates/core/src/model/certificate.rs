use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::progress::ProgressSummary;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CertificateError {
    #[error("quest is not finished: {remaining} task(s) remaining")]
    QuestIncomplete { remaining: usize },
}

/// Proof of a finished quest, issued once every task is completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    earned_points: u32,
    total_points: u32,
    task_count: usize,
    issued_at: DateTime<Utc>,
}

impl Certificate {
    /// # Errors
    ///
    /// Returns `CertificateError::QuestIncomplete` while tasks remain.
    pub fn issue(
        summary: &ProgressSummary,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, CertificateError> {
        if !summary.is_complete() {
            return Err(CertificateError::QuestIncomplete {
                remaining: summary.remaining(),
            });
        }
        Ok(Self {
            earned_points: summary.earned_points,
            total_points: summary.total_points,
            task_count: summary.total_count,
            issued_at,
        })
    }

    #[must_use]
    pub fn earned_points(&self) -> u32 {
        self.earned_points
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.task_count
    }

    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
