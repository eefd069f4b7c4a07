use thiserror::Error;

/// Why a clipboard write did not happen
///
/// Never shown to the visitor; the only visible effect is a missing badge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available in this context")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
