//! IAM-style access policy returned by the connection authorizer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Principal reported on every policy.
pub const PRINCIPAL_ID: &str = "user";
/// IAM policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";
/// Action the single policy statement applies to.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
/// Resource the single policy statement applies to.
pub const ANY_RESOURCE: &str = "*";

/// Outcome of an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Effect {
    Allow,
    Deny,
}

/// A single statement of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

/// Connection identity handed to downstream integrations on Allow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionContext {
    pub connection_id: String,
}

/// Authorizer response.
///
/// `context` is present if and only if the effect is `Allow`. The only way to
/// build a policy is [`AccessPolicy::allow`] or [`AccessPolicy::deny`], which
/// keeps that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicy {
    principal_id: String,
    policy_document: PolicyDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<ConnectionContext>,
}

impl AccessPolicy {
    /// Grant invoke access to the given connection.
    pub fn allow(connection_id: impl Into<String>) -> Self {
        Self::build(
            Effect::Allow,
            Some(ConnectionContext {
                connection_id: connection_id.into(),
            }),
        )
    }

    /// Refuse invoke access. Carries no connection identity.
    pub fn deny() -> Self {
        Self::build(Effect::Deny, None)
    }

    fn build(effect: Effect, context: Option<ConnectionContext>) -> Self {
        Self {
            principal_id: PRINCIPAL_ID.to_string(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: ANY_RESOURCE.to_string(),
                }],
            },
            context,
        }
    }

    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }

    pub fn policy_document(&self) -> &PolicyDocument {
        &self.policy_document
    }

    /// Effect of the (single) statement.
    pub fn effect(&self) -> Effect {
        self.policy_document
            .statement
            .first()
            .map(|s| s.effect)
            .unwrap_or(Effect::Deny)
    }

    pub fn is_allowed(&self) -> bool {
        self.effect() == Effect::Allow
    }

    pub fn context(&self) -> Option<&ConnectionContext> {
        self.context.as_ref()
    }

    /// Connection ID carried by an Allow policy.
    pub fn connection_id(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.connection_id.as_str())
    }
}
