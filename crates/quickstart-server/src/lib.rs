//! Quickstart server library - health checks and gateway event handlers over HTTP.
//!
//! This library provides the HTTP routes, middleware, configuration and
//! application state for the Quickstart server. It's separated from main.rs
//! to enable integration testing.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
