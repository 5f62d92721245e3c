//! Deterministic scoring and ranking for screened job candidates.
//!
//! Fact extraction is delegated to a pluggable backend; everything after it
//! is pure arithmetic over rubrics, so repeated runs agree byte for byte.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod telemetry;
