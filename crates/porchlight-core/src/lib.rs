//! Shared service plumbing for Porchlight services.
//!
//! Health handlers, request-id middleware, and the tracing bootstrap.

pub mod health;
pub mod middleware;
pub mod tracing;
