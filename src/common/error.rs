//! Error types for the aging simulator.
//!
//! Every variant belongs to the driver boundary. The aging page table itself
//! has no failure modes once it holds a valid [`FrameCapacity`].
//!
//! [`FrameCapacity`]: crate::common::FrameCapacity

use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the simulator can report.
#[derive(Error, Debug)]
pub enum Error {
    /// Frame count was zero, negative, or not a number.
    #[error("Number of frames must be a positive integer, got '{0}'")]
    InvalidCapacity(String),

    /// The trace file is missing or cannot be opened.
    #[error("Cannot read trace file {}: {source}", .path.display())]
    UnreadableTrace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in the trace is not an integer page identifier.
    ///
    /// `position` is the 1-based index of the token within the trace.
    #[error("Malformed token '{token}' at position {position} in trace")]
    MalformedToken { token: String, position: usize },

    /// I/O error while reading an already-open trace source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
