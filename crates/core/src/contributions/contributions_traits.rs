//! Contribution repository and service traits.
//!
//! These traits define the contract for contribution operations without any
//! transport-specific types, allowing the hosted store to be swapped for a fake.

use async_trait::async_trait;

use super::contributions_model::{Contribution, NewContribution};
use crate::errors::Result;

/// Trait defining the contract for Contribution repository operations.
///
/// Each method issues exactly one request to the data store. Store errors are
/// returned as-is; there is no retry and no partial result.
#[async_trait]
pub trait ContributionRepositoryTrait: Send + Sync {
    /// Inserts one contribution marked `COMPLETED` and returns the stored row.
    ///
    /// Not idempotent: calling twice records two contributions.
    async fn create(&self, new_contribution: NewContribution) -> Result<Contribution>;

    /// Lists a member's contributions, newest first, each with its project expanded.
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Contribution>>;

    /// Lists a project's contributions, newest first, each with the member profile expanded.
    async fn list_by_project(&self, project_id: &str) -> Result<Vec<Contribution>>;
}

/// Trait defining the contract for Contribution service operations.
#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    async fn create_contribution(&self, new_contribution: NewContribution) -> Result<Contribution>;
    async fn get_member_contributions(&self, member_id: &str) -> Result<Vec<Contribution>>;
    async fn get_project_contributions(&self, project_id: &str) -> Result<Vec<Contribution>>;
}
