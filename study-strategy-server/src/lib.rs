//! Study Strategy Server Library
//!
//! Exposes the configuration and routing layers so the binary and the
//! HTTP-level tests build the exact same service.

pub mod config;
pub mod routes;

pub use config::Config;
pub use routes::router;
