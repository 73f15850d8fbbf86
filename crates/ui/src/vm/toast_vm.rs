use services::CompletionNotice;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub seq: u64,
    pub title: String,
    pub description: String,
    pub is_error: bool,
}

/// The toast slot. Each pushed toast gets a fresh `seq` so a dismissal timer
/// started for an older toast never hides a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_seq: u64,
    current: Option<ToastVm>,
}

impl ToastState {
    /// Show the notice if it announces something. Returns the toast's `seq`.
    pub fn push(&mut self, notice: &CompletionNotice) -> Option<u64> {
        let CompletionNotice::Earned {
            title, description, ..
        } = notice
        else {
            return None;
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(ToastVm {
            seq,
            title: title.clone(),
            description: description.clone(),
            is_error: false,
        });
        Some(seq)
    }

    /// Show a rejected action. Returns the toast's `seq`.
    pub fn push_error(&mut self, error: ViewError) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(ToastVm {
            seq,
            title: "Action failed".to_string(),
            description: error.message().to_string(),
            is_error: true,
        });
        seq
    }

    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.seq == seq) {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ToastVm> {
        self.current.as_ref()
    }
}
