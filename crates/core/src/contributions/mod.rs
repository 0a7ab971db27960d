//! Contributions module - domain models, services, and traits.

mod contributions_constants;
mod contributions_model;
mod contributions_service;
mod contributions_traits;



pub use contributions_constants::*;
pub use contributions_model::{
    deserialize_id, Contribution, ContributionStatus, NewContribution, RelatedRecord,
};
pub use contributions_service::ContributionService;
pub use contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
