//! Build-time faults.
//!
//! Matching never produces an error; a request without a route is `None`.

/// Error type for route tree construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Path segment {0:?} contains invalid characters")]
    InvalidSegment(String),
    #[error("Cannot assign parametric child, already has one")]
    DuplicateParametricChild,
    #[error("Cannot assign wildcard child, already has one")]
    DuplicateWildcardChild,
    #[error("Parametric segment and child node must be either both present or both absent")]
    IncompleteParametricChild,
    #[error("Cannot merge an empty sequence of route trees")]
    NothingToMerge,
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
