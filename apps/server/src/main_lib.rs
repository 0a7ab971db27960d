use std::sync::Arc;

use crate::{config::Config, image_hosts::ImageHostPolicy};
use fundboard_core::contributions::{ContributionService, ContributionServiceTrait};
use fundboard_storage_rest::{
    contributions::ContributionRepository, DataClient, DataClientConfig,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub contribution_service: Arc<dyn ContributionServiceTrait>,
    pub image_hosts: ImageHostPolicy,
    /// Form target of the verification card.
    pub verify_action: String,
    /// Link target of the verification card's "Resend" action.
    pub resend_url: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client_config = DataClientConfig::new(&config.data_api_url, &config.data_api_key)
        .with_timeout(config.request_timeout);
    let client = DataClient::new(&client_config)?;
    tracing::info!("Data store in use: {}", client.rest_url());

    let repository = Arc::new(ContributionRepository::new(client));
    let contribution_service: Arc<dyn ContributionServiceTrait> =
        Arc::new(ContributionService::new(repository));

    let image_hosts = ImageHostPolicy::new(&config.app_domain, &config.data_api_url)?;
    tracing::debug!("Allowed image hosts: {:?}", image_hosts.hosts());

    Ok(Arc::new(AppState {
        contribution_service,
        image_hosts,
        verify_action: config.verify_action.clone(),
        resend_url: config.resend_url.clone(),
    }))
}
