//! Core domain concepts shared across all subdomains.
//!
//! - [`question::QuestionSet`] — the questions a new session is seeded with
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
