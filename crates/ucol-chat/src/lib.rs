//! Gateway to the external generative-language service.
//!
//! One call per user prompt, no retries, no streaming. Upstream
//! failures never reach the end user: they are logged operator-side and
//! masked behind a fixed fallback string.
//!
//! ## Core Types
//!
//! - [`Gateway`] — The completion client
//! - [`Preamble`] — Versioned system-instruction configuration
//! - [`UpstreamError`] — What the external service can do wrong
mod gateway;
mod preamble;
mod wire;

pub use gateway::*;
pub use preamble::*;
