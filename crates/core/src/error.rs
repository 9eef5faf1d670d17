//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic outcome of a single store operation; none
/// of them is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input was absent or falsy.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced product does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A query ran fine but matched nothing.
    #[error("empty result: {0}")]
    EmptyResult(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn empty_result(msg: impl Into<String>) -> Self {
        Self::EmptyResult(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::EmptyResult(m) | Self::InvalidId(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_strips_variant_prefix() {
        let err = DomainError::not_found("Produto não encontrado");
        assert_eq!(err.message(), "Produto não encontrado");
        assert_eq!(err.to_string(), "not found: Produto não encontrado");
    }
}
