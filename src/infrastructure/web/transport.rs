//! HTTP Transport
//!
//! The single seam between the gateway and the network. Production code goes through
//! [`ReqwestTransport`]; tests script responses with an in-memory implementation.

use async_trait::async_trait;
use getset::{CopyGetters, Getters};
use reqwest::{header::RETRY_AFTER, Client};

use super::{
    errors::GatewayError,
    request::{build_headers, ApiRequest},
};

/// What the gateway needs from one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct RawResponse {
    #[getset(get_copy = "pub")]
    status: u16,
    #[getset(get = "pub")]
    retry_after: Option<String>,
    #[getset(get = "pub")]
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, retry_after: Option<String>, body: &str) -> Self {
        Self {
            status,
            retry_after,
            body: body.to_string(),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(200, None, body)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, GatewayError>;
}

pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, GatewayError> {
        let resp = self
            .http_client
            .get(request.url().as_str())
            .headers(build_headers(request.headers()))
            .send()
            .await
            .map_err(|e| GatewayError::WebRequestFailed(e.to_string()))?;

        let status = resp.status().as_u16();
        let retry_after = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::WebRequestFailed(e.to_string()))?;

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}
