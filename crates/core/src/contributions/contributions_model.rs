//! Contribution domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::contributions_constants::CONTRIBUTION_STATUS_COMPLETED;

/// State of a contribution.
///
/// Only `Completed` is ever written by this crate: the payment has already
/// succeeded upstream by the time a contribution is recorded. Any other value
/// found in the store is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContributionStatus {
    Completed,
    Unrecognized(String),
}

impl ContributionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContributionStatus::Completed => CONTRIBUTION_STATUS_COMPLETED,
            ContributionStatus::Unrecognized(value) => value,
        }
    }
}

impl From<String> for ContributionStatus {
    fn from(value: String) -> Self {
        if value == CONTRIBUTION_STATUS_COMPLETED {
            ContributionStatus::Completed
        } else {
            ContributionStatus::Unrecognized(value)
        }
    }
}

impl From<ContributionStatus> for String {
    fn from(status: ContributionStatus) -> Self {
        match status {
            ContributionStatus::Completed => CONTRIBUTION_STATUS_COMPLETED.to_string(),
            ContributionStatus::Unrecognized(value) => value,
        }
    }
}

/// A record owned by another part of the system (a project or a member
/// profile), embedded read-only in contribution listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RelatedRecord {
    /// Returns a column of the related record as a string, if it is one.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Domain model representing a contribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub amount: Decimal,
    pub project_id: String,
    pub member_id: String,
    pub payment_id: String,
    pub status: ContributionStatus,
    pub created_at: DateTime<Utc>,
    /// Expanded project, present on listings by member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<RelatedRecord>,
    /// Expanded member profile, present on listings by project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_profile: Option<RelatedRecord>,
}

/// Input model for recording a new contribution
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub amount: Decimal,
    pub project_id: String,
    pub member_id: String,
    #[serde(rename = "stripePaymentIntentId")]
    pub payment_intent_id: String,
}

impl NewContribution {
    pub fn new(
        amount: Decimal,
        project_id: impl Into<String>,
        member_id: impl Into<String>,
        payment_intent_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            project_id: project_id.into(),
            member_id: member_id.into(),
            payment_intent_id: payment_intent_id.into(),
        }
    }

    /// Status assigned to every contribution at creation time.
    pub fn initial_status(&self) -> ContributionStatus {
        ContributionStatus::Completed
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    String(String),
    Number(serde_json::Number),
}

/// Reads a key column that may be text/uuid or a bigint identity and keeps it
/// as a string.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match IdInput::deserialize(deserializer)? {
        IdInput::String(s) => Ok(s),
        IdInput::Number(n) => Ok(n.to_string()),
    }
}
