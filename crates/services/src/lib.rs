#![forbid(unsafe_code)]

pub mod error;
pub mod quest_service;

pub use quest_core::Clock;

pub use error::QuestError;
pub use quest_service::{CompletionNotice, QuestService, TaskStatus};
