//! Server assembly: configuration and application wiring.

pub mod config;

pub use config::{ConfigError, GatewayConfig};
