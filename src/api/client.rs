use super::error::{ApiError, Result};
use super::models::DnsRecord;
use async_trait::async_trait;
use log::debug;

/// Operations against a remote DNS record collection.
///
/// Implementors provide the three HTTP exchanges. Lookup by id and
/// verify-then-delete are built on top of `list_records`, since the API has
/// no get-by-id endpoint and does not report a missing record on delete.
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn list_records(&self) -> Result<Vec<DnsRecord>>;

    /// Creates `record` and returns it with the server-assigned id filled in.
    async fn create_record(&self, record: DnsRecord) -> Result<DnsRecord>;

    /// Deletes `id` unconditionally.
    async fn remove_record(&self, id: u64) -> Result<()>;

    async fn get_record(&self, id: u64) -> Result<DnsRecord> {
        self.list_records()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(ApiError::NotFound(id))
    }

    /// Deletes `id` if it is currently listed, otherwise does nothing.
    ///
    /// The record can disappear between the list and the delete; the API has
    /// no conditional delete to close that window.
    async fn delete_record(&self, id: u64) -> Result<()> {
        let records = self.list_records().await?;

        if records.iter().any(|record| record.id == id) {
            self.remove_record(id).await
        } else {
            debug!("DNS record {} not present, skipping delete", id);
            Ok(())
        }
    }
}
