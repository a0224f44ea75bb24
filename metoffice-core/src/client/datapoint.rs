use async_trait::async_trait;
use reqwest::{Client, Request};
use tracing::debug;

use crate::error::{TransportError, truncate_body};

use super::{ClientConfig, Resource, Transport};

/// [`Transport`] over HTTP against the DataPoint service.
#[derive(Debug, Clone)]
pub struct DataPointClient {
    config: ClientConfig,
    http: Client,
}

impl DataPointClient {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| TransportError::Client { source })?;

        Ok(Self { config, http })
    }

    /// Build the GET request for a resource without sending it.
    pub fn request(&self, resource: Resource, id: &str) -> Result<Request, TransportError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), resource.path(id)?);

        self.http
            .get(url)
            .query(resource.extra_query())
            .query(&[("key", self.config.api_key.as_str())])
            .build()
            .map_err(|source| TransportError::Url { resource, source: source.without_url() })
    }
}

#[async_trait]
impl Transport for DataPointClient {
    async fn fetch(&self, resource: Resource, id: &str) -> Result<Vec<u8>, TransportError> {
        let request = self.request(resource, id)?;
        debug!(%resource, path = request.url().path(), "sending DataPoint request");

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|source| TransportError::Request { resource, source: source.without_url() })?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|source| TransportError::Body { resource, source: source.without_url() })?;

        debug!(%resource, %status, bytes = body.len(), "received DataPoint response");

        if !status.is_success() {
            return Err(TransportError::Status {
                resource,
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(body.to_vec())
    }
}
