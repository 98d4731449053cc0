//! HTTP handlers for the part analysis service.

pub mod analyze;
pub mod health;
pub mod metrics;
