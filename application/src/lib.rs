//! Application layer for qa-session
//!
//! This crate contains the QA service use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{TransformFailurePolicy, TransformParams};
pub use ports::{
    answer_transformer::{AnswerTransformer, TransformError},
    session_event_logger::{
        NoSessionEventLogger, RejectionReason, SessionEvent, SessionEventLogger,
    },
};
pub use use_cases::qa_service::{QaService, QaServiceError};
