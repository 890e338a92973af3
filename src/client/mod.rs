//! HTTP client for the Postman REST API

pub mod http;

pub use http::{ApiResponse, PostmanClient, USER_AGENT_STRING};
