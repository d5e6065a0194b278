use crate::error::GatewayError;
use catalog_models::{Category, DetailRecord, DetailResult, PageResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://zeldvorik.ru/apiv3/api.php";

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(default)]
    data: Option<DetailRecord>,
}

pub fn list_url(base_url: &str, category: Category, page: u32) -> String {
    format!("{}?action={}&page={}", base_url, category.slug(), page)
}

pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{}?action=search&q={}", base_url, urlencoding::encode(query))
}

pub fn detail_url(base_url: &str, detail_path: &str) -> String {
    format!(
        "{}?action=detail&detailPath={}",
        base_url,
        urlencoding::encode(detail_path)
    )
}

pub fn decode_page(url: &str, body: &str) -> Result<PageResult, GatewayError> {
    serde_json::from_str(body).map_err(|source| GatewayError::Decode {
        url: url.to_string(),
        source,
    })
}

/// A decodable body counts as success even when `data` is missing; that is the "not found" case
pub fn decode_detail(url: &str, body: &str) -> Result<DetailResult, GatewayError> {
    let envelope: DetailEnvelope = serde_json::from_str(body).map_err(|source| GatewayError::Decode {
        url: url.to_string(),
        source,
    })?;
    Ok(DetailResult {
        success: true,
        data: envelope.data,
    })
}

async fn get_body(client: &Client, url: &str) -> Result<String, GatewayError> {
    debug!("GET {}", url);
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| GatewayError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| GatewayError::Transport {
        url: url.to_string(),
        source,
    })
}

pub async fn get_listing(
    client: &Client,
    base_url: &str,
    category: Category,
    page: u32,
) -> Result<PageResult, GatewayError> {
    let url = list_url(base_url, category, page);
    let body = get_body(client, &url).await?;
    let result = decode_page(&url, &body)?;
    debug!(
        "Catalog listing: category={}, page={}, items_on_page={}, has_more={}",
        category.slug(),
        page,
        result.items.len(),
        result.has_more
    );
    Ok(result)
}

pub async fn search(client: &Client, base_url: &str, query: &str) -> Result<PageResult, GatewayError> {
    let url = search_url(base_url, query);
    let body = get_body(client, &url).await?;
    let result = decode_page(&url, &body)?;
    debug!("Catalog search: query={:?}, items={}", query, result.items.len());
    Ok(result)
}

pub async fn get_detail(client: &Client, base_url: &str, detail_path: &str) -> Result<DetailResult, GatewayError> {
    let url = detail_url(base_url, detail_path);
    let body = get_body(client, &url).await?;
    decode_detail(&url, &body)
}
