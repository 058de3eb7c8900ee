use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};
use tracing::info;
use wreq::Client;
use wreq_util::Emulation;

/// Thin client around the cluster's `_cat/indices` endpoint.
pub struct CatIndicesFetcher {
    client: Client,
}

impl CatIndicesFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().emulation(Emulation::Firefox139).build()?;

        Ok(CatIndicesFetcher { client })
    }

    /// Performs a single GET and returns the full response body as text.
    pub async fn fetch_raw(&self, url: &str) -> Result<String> {
        info!("Fetching index metadata from {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {}", response.status()));
        }

        Ok(response.text().await?)
    }
}

/// Builds the `_cat/indices` URL for all indexes whose names carry the given
/// date, restricted to the three columns the report needs, sizes in bytes.
pub fn build_catalog_url(endpoint: &str, date: NaiveDate) -> String {
    format!(
        "https://{}/_cat/indices/*{}*{:02}*{:02}*?v&h=index,pri.store.size,pri&format=json&bytes=b",
        endpoint,
        date.year(),
        date.month(),
        date.day()
    )
}
