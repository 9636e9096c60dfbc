//! HTTP route handlers.

pub mod docs;
pub mod events;
pub mod health;
