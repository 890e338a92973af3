//! Typed payloads for the remote contract

pub mod types;

pub use types::*;
