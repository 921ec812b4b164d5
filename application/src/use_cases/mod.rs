//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod qa_service;
pub(crate) mod submit_answers;

#[cfg(test)]
pub(crate) mod test_support;
