//! Wire models for the `contributions` table.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use fundboard_core::contributions::{deserialize_id, Contribution, NewContribution, RelatedRecord};

/// Row of the `contributions` table as returned by the store, with any
/// embedded relation that was requested in the projection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ContributionDB {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub amount: Decimal,
    #[serde(deserialize_with = "deserialize_id")]
    pub proposal_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub member_id: String,
    pub payment_id: String,
    pub status: String,
    #[serde(deserialize_with = "timestamp_utc")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<RelatedRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_profile: Option<RelatedRecord>,
}

/// Row payload for inserting a contribution
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewContributionDB {
    pub amount: Decimal,
    pub proposal_id: String,
    pub member_id: String,
    pub payment_id: String,
    pub status: String,
}

// Conversion to domain models
impl From<ContributionDB> for Contribution {
    fn from(db: ContributionDB) -> Self {
        Self {
            id: db.id,
            amount: db.amount,
            project_id: db.proposal_id,
            member_id: db.member_id,
            payment_id: db.payment_id,
            status: db.status.into(),
            created_at: db.created_at,
            project: db.project,
            member_profile: db.member_profile,
        }
    }
}

impl From<NewContribution> for NewContributionDB {
    fn from(domain: NewContribution) -> Self {
        Self {
            status: domain.initial_status().into(),
            amount: domain.amount,
            proposal_id: domain.project_id,
            member_id: domain.member_id,
            payment_id: domain.payment_intent_id,
        }
    }
}

/// Accepts `timestamptz` values (RFC 3339 with offset) and plain `timestamp`
/// values, which are taken as UTC.
fn timestamp_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
