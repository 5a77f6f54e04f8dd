use std::time::Duration;

use super::{
    client::DnsApiClient,
    error::{ApiError, Result},
    models::*,
};
use async_trait::async_trait;
use log::debug;
use reqwest::RequestBuilder;

pub const API_BASE_URL: &str = "https://api.omg.lol";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// DNS client for a single omg.lol address.
pub struct OmglolClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    api_key: String,
}

impl std::fmt::Debug for OmglolClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmglolClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

#[async_trait]
impl DnsApiClient for OmglolClient {
    async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        let text = self.send(self.client.get(self.records_url())).await?;
        let response: ApiResponse<ListResponse> = serde_json::from_str(&text)?;

        debug!(
            "Listed {} DNS records: {}",
            response.response.dns.len(),
            response.response.message
        );
        Ok(response.response.dns)
    }

    async fn create_record(&self, mut record: DnsRecord) -> Result<DnsRecord> {
        let text = self
            .send(self.client.post(self.records_url()).json(&record))
            .await?;
        let response: ApiResponse<CreateResponse> = serde_json::from_str(&text)?;

        let id = response.response.response_received.data.id;
        if id == 0 {
            return Err(ApiError::decode("create response carried no record ID"));
        }

        record.id = id;
        Ok(record)
    }

    async fn remove_record(&self, id: u64) -> Result<()> {
        self.send(self.client.delete(self.record_url(id))).await?;
        Ok(())
    }
}

impl OmglolClient {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(API_BASE_URL, username, api_key)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            api_key: api_key.into(),
        })
    }

    fn records_url(&self) -> String {
        format!("{}/address/{}/dns", self.base_url, self.username)
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/{}", self.records_url(), id)
    }

    // Authorizes and sends the request, returning the body of a successful
    // response. Any status >= 400 becomes `ApiError::Api` with the raw body.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.bearer_auth(&self.api_key).send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url().path());

        let text = response.text().await?;
        if status.as_u16() >= 400 {
            return Err(ApiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
