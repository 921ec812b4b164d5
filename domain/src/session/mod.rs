//! Question-answer session domain.
//!
//! - [`entities::SessionData`] — a session and its answers
//! - [`entities::QASet`] / [`entities::AnswerPair`] — the answers themselves
//! - [`submission::AnswerSubmission`] — primary answers sent for transformation
//! - [`repository::SessionRepository`] — trait for session storage

pub mod entities;
pub mod repository;
pub mod submission;
