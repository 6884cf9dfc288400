//! Orchestration layer for add-on publishing
//!
//! This module provides the high-level component driving the linear
//! sign → upload → report run.

pub mod addon_publisher;

// Re-export main types for convenience
pub use addon_publisher::{AddonPublisher, PublishInputs, PublishReport};
