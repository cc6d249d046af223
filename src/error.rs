// model = "claude-opus-4-5"
// created = "2026-07-29"
// modified = "2026-07-29"
// driver = "Isaac Clayton"

//! Errors surfaced by the public editing API.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A position argument exceeded the buffer's current length.
    #[error("position {pos} out of range (len {len})")]
    OutOfRange { pos: usize, len: usize },

    /// The index failed to resolve a position to a node. This is an internal
    /// bug, not a caller mistake; it should never surface.
    #[error("skip list corrupted near position {pos}")]
    Corrupted { pos: usize },
}
