//! Middleware module
//!
//! Contains Tower middleware applied to every route.

pub mod security_headers;

pub use security_headers::{security_headers, CONTENT_SECURITY_POLICY};
