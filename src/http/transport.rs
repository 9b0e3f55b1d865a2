// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Control-channel transport

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

use super::header_names::{AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE};
use crate::compression::decompress_body;
use crate::config::{ClientConfig, Endpoint};
use crate::error::{Error, Result};

/// Carries one JSON command to the service and returns the decoded reply.
///
/// `sid` is appended as a `?sid=` query parameter for session-scoped calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, path: &str, sid: Option<u64>, body: Bytes) -> Result<String>;
}

/// reqwest-backed transport with the fixed credential headers
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Endpoint,
}

impl HttpTransport {
    /// Build a transport from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&config.key)
            .map_err(|e| Error::config(format!("Invalid authorization key: {}", e)))?;
        authorization.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, authorization);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(default_headers);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Service endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, path: &str, sid: Option<u64>, body: Bytes) -> Result<String> {
        let url = self.endpoint.url_for(path, sid);
        debug!(path, ?sid, body_len = body.len(), "Calling service");

        let response = self.client.post(&url).body(body).send().await?;

        let status = response.status();
        let encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let raw = response.bytes().await?;
        debug!(
            path,
            status = status.as_u16(),
            encoding = %encoding,
            len = raw.len(),
            "Service replied"
        );

        Ok(decompress_body(&raw, &encoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let config = ClientConfig::new("localhost:9000", "secret").unwrap();
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint().as_str(), "https://localhost:9000");
    }

    #[test]
    fn test_rejects_unprintable_key() {
        let config = ClientConfig::new("localhost:9000", "bad\nkey").unwrap();
        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
