use std::sync::Arc;

use crate::api::{DnsApiClient, OmglolClient, Result};
use crate::config::Config;
use crate::dns::{DnsDataSource, DnsResource};

/// Owns the configured client and hands it to the resource and data source.
pub struct Provider<C> {
    client: Arc<C>,
}

impl Provider<OmglolClient> {
    pub fn configure(config: &Config) -> Result<Self> {
        let client =
            OmglolClient::with_base_url(&config.base_url, &config.username, &config.api_key)?;
        Ok(Self::new(client))
    }
}

impl<C: DnsApiClient> Provider<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn resource(&self) -> DnsResource<C> {
        DnsResource::new(Arc::clone(&self.client))
    }

    pub fn data_source(&self) -> DnsDataSource<C> {
        DnsDataSource::new(Arc::clone(&self.client))
    }
}
