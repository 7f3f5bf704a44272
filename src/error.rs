//! Error type shared by the engine, the search steps and the backends.

use thiserror::Error;

/// Errors reported by the scheduling core.
///
/// Nothing is recovered silently: every failure inside
/// [`schedule`](crate::engine::schedule) or a search step is returned to
/// the caller, which owns any retry policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowShopError {
    /// Malformed counts or dimensions, a stage without machines,
    /// or an invalid processing time.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A job ordering that is not a permutation of `0..num_jobs`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Out-of-range algorithm parameters or a mismatched search state.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A simulation backend failed or returned a malformed response.
    #[error("simulation backend failed: {0}")]
    Backend(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_category() {
        let err = FlowShopError::InvalidInstance("stage 1 has no machines".into());
        assert_eq!(err.to_string(), "invalid instance: stage 1 has no machines");

        let err = FlowShopError::InvalidConfig("tournament_size must be >= 1".into());
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
