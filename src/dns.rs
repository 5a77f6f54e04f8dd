use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::api::{ApiError, DnsApiClient, DnsRecord, Result};

pub const DEFAULT_TTL: u32 = 3600;

/// User-supplied fields of a managed record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordSpec {
    #[validate(length(min = 1, message = "Record type cannot be empty"))]
    pub r#type: String,

    #[validate(length(min = 1, message = "Record name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Record data cannot be empty"))]
    pub data: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl From<RecordSpec> for DnsRecord {
    fn from(spec: RecordSpec) -> Self {
        DnsRecord {
            r#type: spec.r#type,
            name: spec.name,
            data: spec.data,
            ttl: spec.ttl.unwrap_or(DEFAULT_TTL),
            ..Default::default()
        }
    }
}

/// Managed DNS record lifecycle. The API has no update endpoint, so changing
/// a record means deleting and recreating it.
pub struct DnsResource<C> {
    client: Arc<C>,
}

impl<C: DnsApiClient> DnsResource<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn create(&self, spec: RecordSpec) -> Result<DnsRecord> {
        spec.validate()?;

        info!("Creating {} record: {}", spec.r#type, spec.name);
        let record = self.client.create_record(spec.into()).await?;
        info!("Created DNS record {}", record.id);

        Ok(record)
    }

    pub async fn read(&self, id: u64) -> Result<DnsRecord> {
        self.client.get_record(id).await
    }

    pub async fn update(&self, state: DnsRecord) -> Result<DnsRecord> {
        debug!("Update requested for DNS record {}, nothing to do", state.id);
        Ok(state)
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        info!("Deleting DNS record {}", id);
        self.client.delete_record(id).await
    }
}

/// Read-only lookup of existing records.
pub struct DnsDataSource<C> {
    client: Arc<C>,
}

impl<C: DnsApiClient> DnsDataSource<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Returns the first record named `name`.
    pub async fn read(&self, name: &str) -> Result<DnsRecord> {
        self.client
            .list_records()
            .await?
            .into_iter()
            .find(|record| record.name == name)
            .ok_or_else(|| ApiError::NameNotFound(name.to_string()))
    }

    pub async fn read_all(&self) -> Result<Vec<DnsRecord>> {
        self.client.list_records().await
    }
}
