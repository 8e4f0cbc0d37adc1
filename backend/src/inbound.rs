//! Driving adapters: the protocols through which callers reach the domain.

pub mod http;
