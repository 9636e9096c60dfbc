//! Per-invocation metadata passed alongside every event.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata about the current invocation.
///
/// Handlers treat this as opaque: it is logged, never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationContext {
    /// Unique ID of this invocation.
    pub request_id: String,
    /// Entry point that was invoked (e.g. `ws-authorizer`).
    pub function_name: String,
    /// Distributed trace header, if the caller sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Point in time after which the caller stops waiting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Originating client address as seen through trusted proxies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_addr: Option<String>,
    /// When the invocation started.
    pub invoked_at: DateTime<Utc>,
}

impl InvocationContext {
    /// Create a context with a freshly generated request ID.
    pub fn new(function_name: impl Into<String>) -> Self {
        Self::with_request_id(function_name, Uuid::new_v4().to_string())
    }

    pub fn with_request_id(function_name: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: function_name.into(),
            trace_id: None,
            deadline: None,
            client_addr: None,
            invoked_at: Utc::now(),
        }
    }

    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Set the deadline from epoch milliseconds. Out-of-range values are ignored.
    pub fn deadline_ms(mut self, epoch_ms: i64) -> Self {
        self.deadline = Utc.timestamp_millis_opt(epoch_ms).single();
        self
    }

    pub fn client_addr(mut self, addr: impl Into<String>) -> Self {
        self.client_addr = Some(addr.into());
        self
    }

    /// Milliseconds left before the deadline, if one was set.
    pub fn remaining_ms(&self) -> Option<i64> {
        self.deadline
            .map(|deadline| (deadline - Utc::now()).num_milliseconds().max(0))
    }
}
