//! One-shot user notices
//!
//! A FIFO of short messages. Each notice is shown once and removed when the
//! user dismisses it or its timer fires, so a later redraw never shows it
//! again.

use std::collections::VecDeque;

/// Severity, used for styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id, used by the auto-dismiss timer
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
    next_id: u64,
    /// Id of the front notice once its display timer has been started
    shown: Option<u64>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice and return its id
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let notice = Notice {
            id,
            kind,
            text: text.into(),
        };
        match kind {
            NoticeKind::Info => log::info!("notice: {}", notice.text),
            NoticeKind::Error => log::warn!("notice: {}", notice.text),
        }
        self.queue.push_back(notice);
        id
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    /// Notice currently on screen (the oldest pending one)
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// Remove a notice by id; unknown ids (already dismissed) are ignored
    pub fn dismiss(&mut self, id: u64) -> Option<Notice> {
        let index = self.queue.iter().position(|n| n.id == id)?;
        self.queue.remove(index)
    }

    /// Id of the front notice if it has not been reported as shown yet
    ///
    /// Marks it shown, so each notice is returned at most once.
    pub fn take_newly_shown(&mut self) -> Option<u64> {
        let id = self.current()?.id;
        if self.shown == Some(id) {
            return None;
        }
        self.shown = Some(id);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
