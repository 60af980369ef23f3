use crate::domain::model::ProductItem;
use crate::domain::ports::CatalogStore;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Catalog served as a JSON array by a remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    endpoint: String,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogStore for HttpCatalog {
    async fn list_all(&self) -> Result<Vec<ProductItem>> {
        tracing::debug!("Fetching catalog from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(CatalogError::CatalogUnavailable {
                message: format!("{} responded with {}", self.endpoint, status),
            });
        }

        let items: Vec<ProductItem> = response.json().await?;
        Ok(items)
    }
}
