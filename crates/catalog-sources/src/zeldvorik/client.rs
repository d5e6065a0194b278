use crate::traits::ContentGateway;
use crate::zeldvorik::api;
use async_trait::async_trait;
use catalog_config::ApiConfig;
use catalog_models::{Category, DetailResult, PageResult};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Create a reqwest Client with the configured user agent and timeout
pub fn create_http_client(user_agent: &str, timeout: Duration) -> Client {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// HTTP gateway for the zeldvorik catalog API
#[derive(Clone)]
pub struct ZeldvorikClient {
    client: Arc<Client>,
    base_url: String,
}

impl ZeldvorikClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(create_http_client(ApiConfig::DEFAULT_USER_AGENT, Duration::from_secs(ApiConfig::DEFAULT_TIMEOUT_SECS)), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let client = create_http_client(&config.user_agent, Duration::from_secs(config.timeout_secs));
        info!("Using catalog API at {}", config.base_url);
        Self::with_client(client, config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContentGateway for ZeldvorikClient {
    fn gateway_name(&self) -> &str {
        "zeldvorik"
    }

    async fn list(&self, category: Category, page: u32) -> PageResult {
        match api::get_listing(&self.client, &self.base_url, category, page).await {
            Ok(result) => result,
            Err(e) => {
                error!("Fetch error: {}", e);
                PageResult::failed()
            }
        }
    }

    async fn search(&self, query: &str) -> PageResult {
        match api::search(&self.client, &self.base_url, query).await {
            Ok(result) => result,
            Err(e) => {
                error!("Search error: {}", e);
                PageResult::failed()
            }
        }
    }

    async fn get_detail(&self, detail_path: &str) -> DetailResult {
        match api::get_detail(&self.client, &self.base_url, detail_path).await {
            Ok(result) => result,
            Err(e) => {
                error!("Detail error: {}", e);
                DetailResult::failed()
            }
        }
    }
}
