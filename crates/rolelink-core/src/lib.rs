//! Shared service plumbing: tracing, configuration, request-id middleware
//! and serde helpers.

pub mod config;
pub mod middleware;
pub mod serde;
pub mod tracing;
