//! Domain error types

use crate::session::entities::SessionId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DomainError::SessionNotFound(SessionId::from("abc"));
        assert_eq!(error.to_string(), "Session not found: abc");
    }
}
