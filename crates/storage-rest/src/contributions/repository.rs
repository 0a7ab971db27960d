use async_trait::async_trait;
use log::{debug, info};

use fundboard_core::constants::{CONTRIBUTIONS_TABLE, CREATED_AT_COLUMN};
use fundboard_core::contributions::{
    Contribution, ContributionRepositoryTrait, NewContribution, MEMBER_CONTRIBUTIONS_SELECT,
    PROJECT_CONTRIBUTIONS_SELECT,
};
use fundboard_core::Result;

use super::model::{ContributionDB, NewContributionDB};
use crate::db::{DataClient, Order};

pub struct ContributionRepository {
    client: DataClient,
}

impl ContributionRepository {
    pub fn new(client: DataClient) -> Self {
        ContributionRepository { client }
    }

    async fn list_where(
        &self,
        select: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<Contribution>> {
        let rows = self
            .client
            .table(CONTRIBUTIONS_TABLE)
            .select(select)
            .eq(column, value)
            .order(CREATED_AT_COLUMN, Order::Descending)
            .fetch_all::<ContributionDB>()
            .await?;
        debug!(
            "Fetched {} contributions where {} = {}",
            rows.len(),
            column,
            value
        );
        Ok(rows.into_iter().map(Contribution::from).collect())
    }
}

#[async_trait]
impl ContributionRepositoryTrait for ContributionRepository {
    async fn create(&self, new_contribution: NewContribution) -> Result<Contribution> {
        let row: NewContributionDB = new_contribution.into();
        let created = self
            .client
            .table(CONTRIBUTIONS_TABLE)
            .insert(&row)?
            .fetch_one::<ContributionDB>()
            .await?;
        info!(
            "Inserted contribution {} for project {}",
            created.id, created.proposal_id
        );
        Ok(Contribution::from(created))
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Contribution>> {
        self.list_where(MEMBER_CONTRIBUTIONS_SELECT, "member_id", member_id)
            .await
    }

    async fn list_by_project(&self, project_id: &str) -> Result<Vec<Contribution>> {
        self.list_where(PROJECT_CONTRIBUTIONS_SELECT, "proposal_id", project_id)
            .await
    }
}
