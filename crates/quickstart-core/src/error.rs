//! Error types for Quickstart handlers.

use thiserror::Error;

/// Structural failures of an inbound event.
///
/// Authorization denial and unknown event types are *not* errors; they are
/// ordinary handler outcomes.
#[derive(Error, Debug)]
pub enum QuickstartError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
}
