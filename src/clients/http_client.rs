//! Outbound HTTP transport.
//!
//! The handler only ever needs two things from the network: a GET whose body
//! is JSON and a GET whose body is kept as raw bytes. [`HttpFetch`] names that
//! seam so tests can stand a mock in for [`ReqwestFetcher`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::GifError;

#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, GifError>;

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, GifError>;
}

/// `reqwest` backed transport. No timeout and no retries: a hung call runs
/// until the Lambda runtime kills the invocation.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, GifError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GifError::UpstreamStatus {
                status: status.as_u16(),
                url: strip_query(url),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, GifError> {
        let body = self.get_checked(url).await?.bytes().await?;
        debug!("Received {} byte JSON body", body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, GifError> {
        let body = self.get_checked(url).await?.bytes().await?;
        debug!("Received {} byte binary body", body.len());
        Ok(body.to_vec())
    }
}

/// Drops the query string so error messages never carry the API key.
fn strip_query(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(
            strip_query("https://api.giphy.com/v1/gifs/search?api_key=k&q=cat"),
            "https://api.giphy.com/v1/gifs/search"
        );
        assert_eq!(strip_query("https://x/cat.gif"), "https://x/cat.gif");
    }
}
