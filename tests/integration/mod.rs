//! Integration tests for the relay
//!
//! These tests drive the complete router through `axum-test`, with providers
//! either stubbed in-process or served by wiremock.

mod health;
mod http_surface;
