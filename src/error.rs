//! Error types for lane access.
//!
//! Unsupported element types and widths never reach runtime - they are
//! rejected by the trait bounds in [`element`](crate::element) and
//! [`lanes`](crate::lanes). The only runtime-observable failure in this
//! crate is an out-of-range lane index on the checked access path.

use thiserror::Error;

/// Main error type for lanewise operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Lane index outside `[0, N)` on a checked access.
    #[error("lane index {lane} out of range for a {lanes}-lane vector")]
    LaneOutOfRange {
        /// The index that was requested.
        lane: usize,
        /// The number of lanes in the vector.
        lanes: usize,
    },
}

/// Result type for lanewise operations.
pub type Result<T> = core::result::Result<T, Error>;
