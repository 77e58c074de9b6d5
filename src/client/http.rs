//! HTTP transport for API requests
//!
//! The adapter never talks to the network directly: it hands a fully composed
//! [`SignedRequest`] to a [`Transport`] and receives the decoded JSON body.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::ExchangeConfig;
use crate::errors::{CcxtError, CcxtResult};
use crate::types::SignedRequest;

/// HTTP execution port
///
/// Implementations perform exactly one network round trip per call and do not
/// retry; a failed write must not be resubmitted behind the caller's back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: SignedRequest) -> CcxtResult<Value>;
}

/// reqwest 기반 HTTP 클라이언트
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// 새로운 HTTP 클라이언트 생성
    pub fn new(config: &ExchangeConfig) -> CcxtResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()
            .map_err(|e| CcxtError::NetworkError {
                url: String::new(),
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// 기존 reqwest 클라이언트 사용
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn classify_status(status: StatusCode, url: &str, body: &str) -> CcxtError {
        let message = format!("HTTP {status}: {url} {body}");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CcxtError::AuthenticationError { message }
            },
            StatusCode::TOO_MANY_REQUESTS => CcxtError::RateLimitExceeded {
                message,
                retry_after_ms: None,
            },
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                CcxtError::RequestTimeout { url: url.to_string() }
            },
            s if s.is_server_error() => CcxtError::ExchangeNotAvailable { message },
            _ => CcxtError::ExchangeError { message },
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: SignedRequest) -> CcxtResult<Value> {
        let mut builder = match request.method.as_str() {
            "GET" => self.client.get(&request.url),
            "POST" => self.client.post(&request.url),
            other => {
                return Err(CcxtError::NotSupported {
                    feature: format!("HTTP method {other}"),
                })
            },
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, url = %request.url, "request rejected");
            return Err(Self::classify_status(status, &request.url, &text));
        }

        if text.trim().is_empty() {
            return Err(CcxtError::BadResponse {
                message: format!("empty body from {}", request.url),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
