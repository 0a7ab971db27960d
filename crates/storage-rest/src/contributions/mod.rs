//! Hosted store implementation for contributions.

mod model;
mod repository;

pub use model::{ContributionDB, NewContributionDB};
pub use repository::ContributionRepository;
