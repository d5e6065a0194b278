use thiserror::Error;

/// Everything that can go wrong talking to the catalog API.
///
/// Callers of [`crate::ContentGateway`] never see this type: the gateway logs it
/// and degrades to a failed page or detail result.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    pub fn url(&self) -> &str {
        match self {
            GatewayError::Transport { url, .. }
            | GatewayError::Status { url, .. }
            | GatewayError::Decode { url, .. } => url,
        }
    }
}
