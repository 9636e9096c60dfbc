//! HTTP middleware applied to every route.

pub mod cors;
pub mod proxy_headers;

pub use cors::cors_layer;
pub use proxy_headers::{proxy_headers, ClientAddr};
