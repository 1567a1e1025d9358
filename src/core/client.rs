use crate::core::query::InventoryQuery;
use crate::domain::model::{PageResponse, SearchFilter, Vehicle};
use crate::utils::error::{InventoryError, Result};
use reqwest::Client;

pub const INVENTORY_API_URL: &str = "https://www.tesla.com/inventory/api/v1/inventory-results";

/// Thin client over the vendor's inventory search endpoint. One GET per
/// page, fully sequential; any non-success status aborts the run.
pub struct InventoryClient {
    client: Client,
    endpoint: String,
}

impl InventoryClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub async fn fetch_page(&self, filter: &SearchFilter, offset: usize) -> Result<PageResponse> {
        let query = InventoryQuery::new(filter, offset).encode()?;

        tracing::debug!("Fetching page at offset {} from {}", offset, self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(InventoryError::BadStatusError {
                status: response.status().as_u16(),
            });
        }

        let page: PageResponse = response.json().await?;
        Ok(page)
    }

    /// Walk the offset-based pagination until the vendor runs out of matches
    /// or we have at least `limit` records. The last page may overshoot the
    /// limit; callers get everything that was fetched.
    pub async fn fetch_all(&self, filter: &SearchFilter, limit: usize) -> Result<Vec<Vehicle>> {
        let mut vehicles: Vec<Vehicle> = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_page(filter, offset).await?;
            let page_len = page.results.len();

            tracing::debug!(
                "Got {} results at offset {} ({} total matches)",
                page_len,
                offset,
                page.total_matches_found
            );

            // An empty page means the vendor under-delivered; stop rather
            // than spin on the same offset forever.
            if page_len == 0 {
                break;
            }

            offset += page_len;
            vehicles.extend(page.results);

            if vehicles.len() >= limit || vehicles.len() >= page.total_matches_found {
                break;
            }
        }

        Ok(vehicles)
    }
}
