use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use super::FetchError;
use super::records::{ParsedRecords, parse_records};

pub const DEFAULT_BASE_URL: &str = "https://680fc38127f2fdac240f4f99.mockapi.io/react";

/// Reads the student collection from a fixed base URL.
pub struct RecordsClient {
    client: Client,
    base_url: String,
}

impl RecordsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self::with_http_client(base_url, client))
    }

    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `<base>/`, never with a doubled slash.
    pub fn collection_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Issues a single GET. No retry and no timeout.
    pub async fn fetch_records(&self) -> Result<ParsedRecords, FetchError> {
        let url = self.collection_url();
        info!("fetching student records from {url}");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        debug!("received {} bytes", body.len());
        parse_records(&body)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/fetch.rs"]
mod tests;
