//! Utility modules.

/// Placeholder image URLs for records.
pub mod image;

/// Log truncation for large response bodies.
pub mod log_sanitizer;
