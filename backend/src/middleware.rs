//! Actix middleware shared by every route.

pub mod request_log;

pub use request_log::RequestLog;
