//! HTTP client plumbing and log setup for outgoing gateway calls.

pub mod logger;
pub mod service;
