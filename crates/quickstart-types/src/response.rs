//! Response shapes returned to the gateway and to HTTP clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Proxy-integration response returned by event handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ResponseEnvelope {
    /// A bare response with no body or headers.
    pub fn status(status_code: u16) -> Self {
        Self {
            is_base64_encoded: None,
            status_code,
            headers: None,
            body: None,
        }
    }

    pub fn ok() -> Self {
        Self::status(200)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn base64_encoded(mut self, encoded: bool) -> Self {
        self.is_base64_encoded = Some(encoded);
        self
    }
}

/// JSEND response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsendStatus {
    Success,
    Fail,
    Error,
}

/// JSEND envelope: `{status, data, message, code}`.
///
/// `data` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsendEnvelope<T = serde_json::Value> {
    pub status: JsendStatus,
    pub data: Option<T>,
    pub message: String,
    pub code: u16,
}

impl<T> JsendEnvelope<T> {
    /// Successful envelope with code 200.
    pub fn success(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            status: JsendStatus::Success,
            data,
            message: message.into(),
            code: 200,
        }
    }
}
