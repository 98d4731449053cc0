//! service-core: Shared infrastructure for the part analysis workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
