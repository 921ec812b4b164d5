//! Session storage adapters.
//!
//! Provides [`InMemorySessionStore`], the process-lifetime implementation of
//! the [`SessionRepository`](qa_domain::SessionRepository) trait.

mod in_memory;

pub use in_memory::InMemorySessionStore;
