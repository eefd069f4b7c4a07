//! CopyFeedback - which string was copied last, and when it stops showing

use std::future::Future;

use super::Clipboard;
use super::error::ClipboardError;

/// How long the badge stays up, per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackDelay {
    Short,
    Medium,
    #[default]
    Long,
}

impl FeedbackDelay {
    pub const fn millis(&self) -> u32 {
        match self {
            Self::Short => 1400,
            Self::Medium => 1500,
            Self::Long => 2000,
        }
    }
}

/// Permission to clear the badge set by one particular copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// The copied value plus a generation counter
///
/// Each settled copy bumps the generation, so a timer armed by an older copy
/// holds a stale ticket and cannot clear a newer value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: Option<String>,
    generation: u64,
}

impl CopyFeedback {
    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.copied.as_deref() == Some(text)
    }

    /// Successful write: show `text` and hand back the ticket to clear it
    pub fn mark(&mut self, text: &str) -> Ticket {
        self.generation += 1;
        self.copied = Some(text.to_string());
        Ticket(self.generation)
    }

    /// Failed write: nothing shows and any pending clear becomes stale
    pub fn fail(&mut self) {
        self.generation += 1;
        self.copied = None;
    }

    /// Clears the badge if `ticket` is still current. Returns whether it did.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.copied.is_none() {
            return false;
        }
        self.copied = None;
        true
    }

    /// Applies the outcome of a write; a ticket means a clear must be scheduled
    pub fn settle(&mut self, text: &str, outcome: Result<(), ClipboardError>) -> Option<Ticket> {
        match outcome {
            Ok(()) => Some(self.mark(text)),
            Err(e) => {
                log::debug!("copy of {} chars failed: {e}", text.len());
                self.fail();
                None
            }
        }
    }
}

/// Somewhere a `CopyFeedback` lives between the write and the clear
pub trait FeedbackCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut CopyFeedback) -> R) -> R;
}

/// One copy cycle: write, settle, wait out the delay, clear if still current
///
/// `sleep` is only called after a successful write. Returns whether this
/// cycle cleared the badge.
pub async fn run_copy<F>(
    clipboard: &impl Clipboard,
    mut feedback: impl FeedbackCell,
    text: &str,
    delay: FeedbackDelay,
    sleep: impl FnOnce(u32) -> F,
) -> bool
where
    F: Future<Output = ()>,
{
    let outcome = clipboard.write_text(text).await;
    let Some(ticket) = feedback.update(|fb| fb.settle(text, outcome)) else {
        return false;
    };
    sleep(delay.millis()).await;
    feedback.update(|fb| fb.expire(ticket))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::future::{self, abortable};
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::clipboard::Clipboard;

    /// In-memory clipboard that records writes
    struct MemoryClipboard {
        accept: bool,
        writes: RefCell<Vec<String>>,
    }

    impl MemoryClipboard {
        fn accepting() -> Self {
            Self {
                accept: true,
                writes: RefCell::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                writes: RefCell::new(Vec::new()),
            }
        }
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
            self.writes.borrow_mut().push(text.to_string());
            let accept = self.accept;
            async move {
                if accept {
                    Ok(())
                } else {
                    Err(ClipboardError::Rejected("NotAllowedError".into()))
                }
            }
        }
    }

    impl FeedbackCell for Rc<RefCell<CopyFeedback>> {
        fn update<R>(&mut self, f: impl FnOnce(&mut CopyFeedback) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    fn shared() -> Rc<RefCell<CopyFeedback>> {
        Rc::new(RefCell::new(CopyFeedback::default()))
    }

    /// A copy cycle whose timer fires when the returned sender is used
    fn held_copy(
        clipboard: &Rc<MemoryClipboard>,
        fb: &Rc<RefCell<CopyFeedback>>,
        text: &'static str,
        cleared: &Rc<Cell<Option<bool>>>,
    ) -> (impl Future<Output = ()> + 'static, oneshot::Sender<()>) {
        let (fire, timer) = oneshot::channel::<()>();
        let clipboard = Rc::clone(clipboard);
        let fb = Rc::clone(fb);
        let cleared = Rc::clone(cleared);
        let cycle = async move {
            let sleep = move |_: u32| async move {
                let _ = timer.await;
            };
            let done = run_copy(&*clipboard, fb, text, FeedbackDelay::Long, sleep).await;
            cleared.set(Some(done));
        };
        (cycle, fire)
    }

    #[test]
    fn delays() {
        assert_eq!(FeedbackDelay::Short.millis(), 1400);
        assert_eq!(FeedbackDelay::Medium.millis(), 1500);
        assert_eq!(FeedbackDelay::Long.millis(), 2000);
    }

    #[test]
    fn successful_copy_shows_then_expires() {
        let clipboard = MemoryClipboard::accepting();
        let fb = shared();
        let slept = Cell::new(None);
        let seen = Rc::clone(&fb);

        let sleep = |ms: u32| {
            slept.set(Some(ms));
            // badge is up while the timer runs
            assert!(seen.borrow().is_copied("sr-only"));
            future::ready(())
        };
        let cleared = block_on(run_copy(&clipboard, Rc::clone(&fb), "sr-only", FeedbackDelay::Long, sleep));

        assert!(cleared);
        assert_eq!(slept.get(), Some(2000));
        assert_eq!(fb.borrow().copied(), None);
        assert_eq!(*clipboard.writes.borrow(), vec!["sr-only".to_string()]);
    }

    #[test]
    fn newer_copy_supersedes_without_flicker() {
        let clipboard = Rc::new(MemoryClipboard::accepting());
        let fb = shared();
        let first_cleared = Rc::new(Cell::new(None));
        let second_cleared = Rc::new(Cell::new(None));
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (first, fire_first) = held_copy(&clipboard, &fb, "t1", &first_cleared);
        spawner.spawn_local(first).unwrap();
        pool.run_until_stalled();
        assert_eq!(fb.borrow().copied(), Some("t1"));

        let (second, fire_second) = held_copy(&clipboard, &fb, "t2", &second_cleared);
        spawner.spawn_local(second).unwrap();
        pool.run_until_stalled();
        assert_eq!(fb.borrow().copied(), Some("t2"));

        // first timer fires: stale, nothing changes
        fire_first.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(first_cleared.get(), Some(false));
        assert_eq!(fb.borrow().copied(), Some("t2"));

        fire_second.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(second_cleared.get(), Some(true));
        assert_eq!(fb.borrow().copied(), None);
    }

    #[test]
    fn cancelled_cycle_never_clears() {
        let clipboard = Rc::new(MemoryClipboard::accepting());
        let fb = shared();
        let first_cleared = Rc::new(Cell::new(None));
        let second_cleared = Rc::new(Cell::new(None));
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (first, fire_first) = held_copy(&clipboard, &fb, "t1", &first_cleared);
        let (first, handle) = abortable(first);
        spawner
            .spawn_local(async move {
                let _ = first.await;
            })
            .unwrap();
        pool.run_until_stalled();

        handle.abort();
        let (second, fire_second) = held_copy(&clipboard, &fb, "t2", &second_cleared);
        spawner.spawn_local(second).unwrap();
        pool.run_until_stalled();

        // the aborted cycle dropped its timer
        assert!(fire_first.send(()).is_err());
        pool.run_until_stalled();
        assert_eq!(first_cleared.get(), None);
        assert_eq!(fb.borrow().copied(), Some("t2"));

        fire_second.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(second_cleared.get(), Some(true));
        assert_eq!(fb.borrow().copied(), None);
    }

    #[test]
    fn same_text_twice_restarts_the_cycle() {
        let mut fb = CopyFeedback::default();

        let first = fb.mark("gap-4");
        let second = fb.mark("gap-4");
        assert!(!fb.expire(first));
        assert!(fb.is_copied("gap-4"));
        assert!(fb.expire(second));
        // one-shot
        assert!(!fb.expire(second));
    }

    #[test]
    fn rejected_write_shows_nothing_and_schedules_nothing() {
        let clipboard = MemoryClipboard::rejecting();
        let fb = shared();
        let slept = Cell::new(false);

        let sleep = |_: u32| {
            slept.set(true);
            future::ready(())
        };
        let cleared = block_on(run_copy(&clipboard, Rc::clone(&fb), "flex-1", FeedbackDelay::Short, sleep));

        assert!(!cleared);
        assert!(!slept.get());
        assert_eq!(fb.borrow().copied(), None);
        assert_eq!(clipboard.writes.borrow().len(), 1);
    }

    #[test]
    fn failure_clears_a_previous_badge() {
        let mut fb = CopyFeedback::default();
        let ticket = fb.mark("border-2");
        assert_eq!(fb.settle("border-4", Err(ClipboardError::Unavailable)), None);
        assert_eq!(fb.copied(), None);
        assert!(!fb.expire(ticket));
    }
}
