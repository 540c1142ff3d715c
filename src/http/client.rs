use crate::error::ProbeError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: u64 = 30;

const USER_AGENT: &str = concat!("gqlfind/", env!("CARGO_PKG_VERSION"));

/// Sends a JSON body and hands back whatever came back.
///
/// `HttpClient` is the real implementation; tests swap in doubles to watch
/// how many requests are in flight.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<GraphQLResponse, ProbeError>;
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<GraphQLResponse, ProbeError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        debug!(url, status, len = bytes.len(), "response received");

        Ok(GraphQLResponse::from_bytes(status, &bytes))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLResponse {
    pub status: u16,
    /// `None` when the body was not JSON.
    pub body: Option<Value>,
}

impl GraphQLResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        Self {
            status,
            body: serde_json::from_slice(bytes).ok(),
        }
    }

    pub fn get_data(&self) -> Option<&Value> {
        self.body.as_ref()?.get("data")
    }
}
