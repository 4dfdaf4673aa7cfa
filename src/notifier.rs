//! User-facing error notifications.
//!
//! Every failed cart operation emits exactly one [`Notice`]. Notices are
//! fire-and-forget and always carry error severity.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::error;

/// The fixed messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    StockExceeded,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::StockExceeded => "Quantidade solicitada fora de estoque",
            Notice::AddFailed => "Erro na adição do produto",
            Notice::RemoveFailed => "Erro na remoção do produto",
            Notice::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for user-visible error messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Emits notices as `error!` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        error!(notice = ?notice, "{}", notice.message());
    }
}

/// Keeps every notice in order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_shares_log_between_clones() {
        let notifier = RecordingNotifier::new();
        let clone = notifier.clone();

        clone.notify(Notice::RemoveFailed);
        notifier.notify(Notice::StockExceeded);

        assert_eq!(notifier.notices(), vec![Notice::RemoveFailed, Notice::StockExceeded]);
    }

    #[test]
    fn test_notice_messages_are_distinct() {
        let all = [Notice::StockExceeded, Notice::AddFailed, Notice::RemoveFailed, Notice::UpdateFailed];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
        assert_eq!(Notice::StockExceeded.to_string(), "Quantidade solicitada fora de estoque");
    }
}
