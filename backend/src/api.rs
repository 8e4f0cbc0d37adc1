//! Operational endpoints that live outside the `/api` resource scope.

pub mod health;

pub use health::HealthState;
