//! Shared plumbing for Wall of Fame services: error bodies, request ids,
//! tracing setup and env-var helpers.

pub mod config;
pub mod error;
pub mod middleware;
pub mod tracing;
