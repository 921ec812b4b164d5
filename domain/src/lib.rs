//! Domain layer for qa-session
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Session**: a server-held unit of state pairing one [`QASet`] with one [`SessionId`]
//! - **QASet**: question text mapped to its [`AnswerPair`]
//! - **AnswerPair**: the user's `primary` answer and its derived `transformed` value

pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    question::{DEFAULT_QUESTIONS, QuestionSet},
};
pub use session::{
    entities::{AnswerPair, QASet, SessionData, SessionId},
    repository::SessionRepository,
    submission::AnswerSubmission,
};
