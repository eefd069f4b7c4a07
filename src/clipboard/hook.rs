//! use_copy - one feedback cycle per copy, owned by the calling scope

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::SystemClipboard;
use super::feedback::{CopyFeedback, FeedbackCell, FeedbackDelay, run_copy};

/// Copy trigger plus the badge state it drives
///
/// The write and the clear timer run as one task spawned in the scope that
/// calls [`CopyHandle::copy`]; unmounting that scope drops the task, so no
/// timer outlives the page.
#[derive(Clone, Copy, PartialEq)]
pub struct CopyHandle {
    feedback: Signal<CopyFeedback>,
    pending: Signal<Option<Task>>,
    delay: FeedbackDelay,
}

pub fn use_copy(delay: FeedbackDelay) -> CopyHandle {
    let feedback = use_signal(CopyFeedback::default);
    let pending = use_signal(|| None);
    CopyHandle {
        feedback,
        pending,
        delay,
    }
}

impl FeedbackCell for Signal<CopyFeedback> {
    fn update<R>(&mut self, f: impl FnOnce(&mut CopyFeedback) -> R) -> R {
        f(&mut self.write())
    }
}

impl CopyHandle {
    pub fn copy(&self, text: impl Into<String>) {
        let text = text.into();
        let feedback = self.feedback;
        let mut pending = self.pending;
        let delay = self.delay;

        // A newer copy owns the badge from here on
        if let Some(task) = pending.write().take() {
            task.cancel();
        }

        let task = spawn(async move {
            run_copy(&SystemClipboard, feedback, &text, delay, TimeoutFuture::new).await;
            pending.set(None);
        });
        pending.set(Some(task));
    }

    /// Reads subscribe the calling component to badge changes
    pub fn is_copied(&self, text: &str) -> bool {
        self.feedback.read().is_copied(text)
    }

    pub fn copied(&self) -> Option<String> {
        self.feedback.read().copied().map(str::to_string)
    }
}
