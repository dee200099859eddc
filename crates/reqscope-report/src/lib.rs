//! Report rendering for reqscope
//!
//! This crate renders aggregated request statistics into the fixed-width
//! per-handler severity table.

mod handlers;

pub use handlers::render_handlers;
