//! Error kinds, split by failure domain.
//!
//! Discovery failures are not errors at all (an absent device is reported
//! as `None` and retried); everything that can actually fail gets its own
//! kind so callers can tell a dead stream from a rejected emission.

use thiserror::Error;

/// Failure creating or driving the virtual output device.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The uinput device could not be created (usually missing
    /// `/dev/uinput` permissions).
    #[error("failed to create virtual device: {0}")]
    Create(#[source] std::io::Error),

    /// An emission was rejected by the kernel.
    #[error("failed to emit event: {0}")]
    Emit(#[source] std::io::Error),

    /// Injected by test doubles.
    #[error("output rejected: {0}")]
    Rejected(String),
}

/// Failure reading the input event stream. Fatal to the running session.
#[derive(Debug, Error)]
#[error("input stream failed: {0}")]
pub struct StreamError(#[from] pub std::io::Error);

/// Top-level failure; the supervisor restarts the pipeline on any of these.
#[derive(Debug, Error)]
pub enum PedalError {
    /// The located device node could not be opened.
    #[error("failed to open input device: {0}")]
    Open(#[source] std::io::Error),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
