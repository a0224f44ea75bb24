use tracing::debug;

use crate::{
    client::{ClientConfig, DataPointClient, Resource, Transport},
    error::{TransportError, WeatherError},
    model::{Region, RegionForecastEntry, Selection, Site, SiteForecast},
    parse,
};

/// Fetches DataPoint resources and hands each body to its parser.
///
/// Every method issues its requests one after another and returns on the
/// first failure.
#[derive(Debug, Clone)]
pub struct DataPoint<T> {
    transport: T,
}

impl DataPoint<DataPointClient> {
    pub fn from_config(config: ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(DataPointClient::new(config)?))
    }
}

impl<T: Transport> DataPoint<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn sites(&self) -> Result<Vec<Site>, WeatherError> {
        let body = self.transport.fetch(Resource::SiteList, "").await?;
        Ok(parse::parse_sites(&body)?)
    }

    pub async fn regions(&self) -> Result<Vec<Region>, WeatherError> {
        let body = self.transport.fetch(Resource::RegionList, "").await?;
        Ok(parse::parse_regions(&body)?)
    }

    pub async fn site_forecast(&self, site_id: &str) -> Result<SiteForecast, WeatherError> {
        let body = self.transport.fetch(Resource::SiteForecast, site_id).await?;
        Ok(parse::parse_site_forecast(&body)?)
    }

    pub async fn region_forecast(
        &self,
        region_id: &str,
    ) -> Result<Vec<RegionForecastEntry>, WeatherError> {
        let body = self.transport.fetch(Resource::RegionForecast, region_id).await?;
        Ok(parse::parse_region_forecast(&body)?)
    }

    /// Sites whose [`Site::summary`] line contains `query` (case-sensitive).
    pub async fn find_sites(&self, query: &str) -> Result<Vec<Site>, WeatherError> {
        let sites = self.sites().await?;
        Ok(sites.into_iter().filter(|s| s.summary().contains(query)).collect())
    }

    /// Resolve a site by exact name, then look up the region carrying its region code.
    /// When several regions share that code the last one listed wins.
    pub async fn select_site(&self, name: &str) -> Result<Selection, WeatherError> {
        let site = self
            .sites()
            .await?
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| WeatherError::SiteNotFound(name.to_string()))?;

        let region = self.regions().await?.into_iter().rev().find(|r| r.name == site.region);
        debug!(site = %site.id, region = ?region.as_ref().map(|r| &r.id), "resolved site selection");

        Ok(Selection { site, region })
    }
}
