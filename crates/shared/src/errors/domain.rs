use thiserror::Error;

/// Business-rule violations raised by the aggregate and search cores.
///
/// Each variant maps to a distinct caller-facing signal, so clients can tell
/// a malformed request from an operation attempted in the wrong state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}
