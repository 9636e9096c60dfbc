//! Event handlers for the Quickstart gateway.

pub mod authorizer;
mod error;
pub mod http;
pub mod lifecycle;
pub mod request;

pub use authorizer::{Authorizer, ConnectionRule, TokenRule};
pub use error::QuickstartError;
pub use lifecycle::LifecycleAction;
pub use request::{parse_event, AuthorizeRequest, LifecycleRequest};

/// Result type for Quickstart operations.
pub type Result<T> = std::result::Result<T, QuickstartError>;
