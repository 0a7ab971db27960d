//! Allow-list of remote hosts that pages may load images from.

use anyhow::{anyhow, Context};
use serde::Serialize;
use url::Url;

/// Video thumbnails embedded on project pages.
pub const YOUTUBE_HOST: &str = "youtube.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHostPolicy {
    hosts: Vec<String>,
}

impl ImageHostPolicy {
    /// Builds the allow-list: YouTube, the deployed app domain, and the
    /// storage host of the data store (taken from its base URL).
    pub fn new(app_domain: &str, data_api_url: &str) -> anyhow::Result<Self> {
        let storage_host = Url::parse(data_api_url)
            .with_context(|| format!("Invalid data store URL: {}", data_api_url))?
            .host_str()
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| anyhow!("Data store URL has no host: {}", data_api_url))?;

        let mut hosts = Vec::with_capacity(3);
        for host in [YOUTUBE_HOST.to_string(), app_domain.to_ascii_lowercase(), storage_host] {
            if !host.is_empty() && !hosts.contains(&host) {
                hosts.push(host);
            }
        }
        Ok(Self { hosts })
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// True when `image_url` is an http(s) URL whose host is on the list.
    /// Hosts match exactly; subdomains are not implied.
    pub fn is_allowed(&self, image_url: &str) -> bool {
        let Ok(url) = Url::parse(image_url) else {
            return false;
        };
        if !matches!(url.scheme(), "https" | "http") {
            return false;
        }
        url.host_str()
            .map(|host| self.hosts.iter().any(|allowed| allowed == host))
            .unwrap_or(false)
    }
}
