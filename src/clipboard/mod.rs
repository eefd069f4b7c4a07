//! Clipboard - async write capability plus the "Copied!" feedback cycle
//!
//! `CopyFeedback` is the plain state machine, `use_copy` wires it to the
//! browser clipboard and a gloo timer.

mod error;
mod feedback;
mod hook;
mod system;

use std::future::Future;

pub use error::ClipboardError;
pub use feedback::FeedbackDelay;
pub use hook::{CopyHandle, use_copy};
pub use system::SystemClipboard;

/// Something that can take a string asynchronously
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}
