//! service-core: Shared infrastructure for medai services.
pub mod config;
pub mod error;
pub mod observability;
