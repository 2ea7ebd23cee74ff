//! Domain error types.

/// A domain invariant was violated while constructing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Relay numbers are 1-based.
    #[error("relay number must be at least 1")]
    RelayNumberZero,
}
