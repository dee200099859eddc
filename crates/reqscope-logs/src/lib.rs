//! Log processing for reqscope
//!
//! This crate provides request-log line classification and per-handler
//! aggregation.

mod aggregate;
mod classifier;
mod stats;

pub use aggregate::{AggregateError, aggregate_files};
pub use classifier::LineClassifier;
pub use stats::{LevelCounts, RequestStats};

// Re-export types used in our public API
pub use reqscope_types::{RequestEvent, Severity};
