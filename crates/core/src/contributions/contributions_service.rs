use log::{debug, info};
use std::sync::Arc;

use super::contributions_model::{Contribution, NewContribution};
use super::contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
use crate::errors::Result;

/// Service for recording and listing contributions
pub struct ContributionService {
    repository: Arc<dyn ContributionRepositoryTrait>,
}

impl ContributionService {
    /// Creates a new ContributionService instance
    pub fn new(repository: Arc<dyn ContributionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ContributionServiceTrait for ContributionService {
    /// Records a contribution for a payment that has already succeeded
    async fn create_contribution(&self, new_contribution: NewContribution) -> Result<Contribution> {
        debug!(
            "Recording contribution of {} to project {} by member {}",
            new_contribution.amount, new_contribution.project_id, new_contribution.member_id
        );
        let contribution = self.repository.create(new_contribution).await?;
        info!(
            "Recorded contribution {} for payment {}",
            contribution.id, contribution.payment_id
        );
        Ok(contribution)
    }

    /// Lists a member's contributions, newest first
    async fn get_member_contributions(&self, member_id: &str) -> Result<Vec<Contribution>> {
        let contributions = self.repository.list_by_member(member_id).await?;
        debug!(
            "Loaded {} contributions for member {}",
            contributions.len(),
            member_id
        );
        Ok(contributions)
    }

    /// Lists a project's contributions, newest first
    async fn get_project_contributions(&self, project_id: &str) -> Result<Vec<Contribution>> {
        let contributions = self.repository.list_by_project(project_id).await?;
        debug!(
            "Loaded {} contributions for project {}",
            contributions.len(),
            project_id
        );
        Ok(contributions)
    }
}
