use quest_core::model::{CertificateError, ProgressError};
use services::QuestError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    QuestIncomplete,
    UnknownTask,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::QuestIncomplete => "Finish every task to unlock your certificate.",
            ViewError::UnknownTask => "That task is not part of this quest.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuestError> for ViewError {
    fn from(err: &QuestError) -> Self {
        match err {
            QuestError::Certificate(CertificateError::QuestIncomplete { .. }) => {
                ViewError::QuestIncomplete
            }
            QuestError::Progress(ProgressError::InvalidTaskId { .. }) => ViewError::UnknownTask,
            _ => ViewError::Unknown,
        }
    }
}
