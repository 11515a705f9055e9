//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, illegal lifecycle moves). External-service degradation is never
/// represented here; advisory failures collapse to neutral values at the
/// boundary instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input, empty cart).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested order status change is not a legal successor.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Attempted mutation of an order already in a terminal state.
    #[error("order is already terminal ({0})")]
    AlreadyTerminal(String),

    /// The referenced order id is unknown.
    #[error("order not found")]
    OrderNotFound,

    /// The referenced catalog item id is unknown.
    #[error("item not found")]
    ItemNotFound,

    /// A feature flag denies the requested action.
    #[error("service disabled: {0}")]
    ServiceDisabled(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. a poisoned store lock).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn already_terminal(status: impl ToString) -> Self {
        Self::AlreadyTerminal(status.to_string())
    }

    pub fn service_disabled(feature: impl Into<String>) -> Self {
        Self::ServiceDisabled(feature.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
