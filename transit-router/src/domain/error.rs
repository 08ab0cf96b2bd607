//! Network model error types.
//!
//! These errors represent data-integrity faults found while loading or
//! reading the network. A route that cannot be found between two stops is
//! not an error and is reported as `None` by the router.

/// Errors raised by the network model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A route or distance references a stop that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A stop with this name is already present
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A route with this name is already present
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),

    /// Neither direction between two stops has a recorded road distance
    #[error("no road distance recorded between {from} and {to}")]
    DistanceNotFound { from: String, to: String },
}
