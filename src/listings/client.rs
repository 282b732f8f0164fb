use crate::config::{ListingConfig, USER_AGENT};
use crate::listings::error::FetchError;
use crate::listings::response::ListingPage;
use crate::listings::traits::ListingSource;
use crate::listings::types::ListingQuery;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Request, Url};
use tracing::{debug, warn};

/// HTTP listing source backed by the marketplace REST API
pub struct ListingClient {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl ListingClient {
    pub fn new(config: &ListingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        let endpoint = format!("{}/properties", config.api_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("Invalid listing API URL: {}", config.api_url))?;

        Ok(Self {
            client,
            endpoint,
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the GET request for a query without sending it
    pub fn build_request(&self, query: &ListingQuery) -> Result<Request, FetchError> {
        let mut builder = self.client.get(self.endpoint.clone()).query(query);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder.build()?)
    }
}

#[async_trait]
impl ListingSource for ListingClient {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<ListingPage, FetchError> {
        let request = self.build_request(query)?;
        debug!("Fetching URL: {}", request.url());

        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            warn!("Listing API returned status: {}", response.status());
            return Err(FetchError::Network(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        debug!("Downloaded {} bytes of JSON", body.len());

        ListingPage::from_slice(&body)
    }

    fn source_name(&self) -> &'static str {
        "Marketplace API"
    }
}
