//! Error kinds for wiregraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters (e.g., a malformed filter pattern)
    ConfigInvalid,

    // =========================================================================
    // Discovery errors
    // =========================================================================
    /// The relation discovery collaborator failed to produce an edge set
    DiscoveryFailed,

    /// Cycle detected by a discovery implementation that does not support them
    CycleDetected,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Internal contract breach; a programming error, not a runtime state
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
