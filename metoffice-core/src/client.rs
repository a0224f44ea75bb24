use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

use crate::error::TransportError;

pub mod datapoint;

pub use datapoint::DataPointClient;

pub const DEFAULT_BASE_URL: &str = "http://datapoint.metoffice.gov.uk";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The DataPoint endpoints this client knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    SiteList,
    RegionList,
    SiteForecast,
    RegionForecast,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::SiteList => "sitelist",
            Resource::RegionList => "regionlist",
            Resource::SiteForecast => "site-forecast",
            Resource::RegionForecast => "region-forecast",
        }
    }

    /// Whether the endpoint is addressed by a site or region id.
    pub fn needs_id(&self) -> bool {
        matches!(self, Resource::SiteForecast | Resource::RegionForecast)
    }

    /// Path below the base URL. Forecast resources require a non-blank id.
    pub fn path(&self, id: &str) -> Result<String, TransportError> {
        let id = id.trim();
        if self.needs_id() && id.is_empty() {
            return Err(TransportError::MissingId { resource: *self });
        }

        Ok(match self {
            Resource::SiteList => "public/data/val/wxfcs/all/json/sitelist".to_string(),
            Resource::RegionList => {
                "public/data/txt/wxfcs/regionalforecast/json/sitelist".to_string()
            }
            Resource::SiteForecast => format!("public/data/val/wxfcs/all/json/{id}"),
            Resource::RegionForecast => format!("public/data/txt/wxfcs/regionalforecast/json/{id}"),
        })
    }

    /// Query parameters other than the API key.
    pub fn extra_query(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Resource::SiteForecast => &[("res", "daily")],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the HTTP client, passed in explicitly rather than held globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches the raw body of a resource. Non-success statuses are errors, so
/// callers only ever see bodies from successful responses.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn fetch(&self, resource: Resource, id: &str) -> Result<Vec<u8>, TransportError>;
}
