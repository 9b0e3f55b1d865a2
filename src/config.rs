// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Client configuration

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the service endpoint
pub const ENV_ENDPOINT: &str = "TLSREMOTE_ENDPOINT";
/// Environment variable holding the authorization key
pub const ENV_KEY: &str = "TLSREMOTE_KEY";
/// Environment variable holding the control-channel timeout in seconds
pub const ENV_TIMEOUT: &str = "TLSREMOTE_TIMEOUT";
/// Environment variable holding a proxy for the control channel
pub const ENV_PROXY: &str = "TLSREMOTE_PROXY";

/// Default control-channel timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Normalized base URL of the remote service.
///
/// Always carries a scheme (`https://` is assumed when none is given) and
/// never ends with a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Normalize and validate a raw endpoint
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::config("Endpoint must not be empty"));
        }

        let mut endpoint = if raw.starts_with("http://") || raw.starts_with("https://") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };

        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        Url::parse(&endpoint)?;
        Ok(Self(endpoint))
    }

    /// Full URL for `path`, with `?sid=` appended for session-scoped calls
    pub fn url_for(&self, path: &str, sid: Option<u64>) -> String {
        match sid {
            Some(sid) => format!("{}{}?sid={}", self.0, path, sid),
            None => format!("{}{}", self.0, path),
        }
    }

    /// Endpoint as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Control-channel configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service endpoint
    pub endpoint: Endpoint,
    /// Value sent in the `authorization` header
    pub key: String,
    /// Timeout for each control call
    pub timeout: Duration,
    /// Skip certificate verification on the control channel
    pub accept_invalid_certs: bool,
    /// Proxy for reaching the service itself
    pub proxy: Option<String>,
    /// User agent for control calls
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for `endpoint` authenticated with `key`
    pub fn new(endpoint: &str, key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::parse(endpoint)?,
            key: key.into(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            proxy: None,
            user_agent: format!("tlsremote/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Read configuration from `TLSREMOTE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var(ENV_ENDPOINT)
            .map_err(|_| Error::config(format!("{} is not set", ENV_ENDPOINT)))?;
        let key = env::var(ENV_KEY).unwrap_or_default();

        let mut config = Self::new(&endpoint, key)?;

        if let Ok(secs) = env::var(ENV_TIMEOUT) {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::config(format!("{} must be a number of seconds", ENV_TIMEOUT))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(proxy) = env::var(ENV_PROXY) {
            if !proxy.is_empty() {
                config.proxy = Some(proxy);
            }
        }

        Ok(config)
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Verify or skip the service's certificate
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_adds_scheme() {
        let endpoint = Endpoint::parse("127.0.0.1:8080").unwrap();
        assert_eq!(endpoint.as_str(), "https://127.0.0.1:8080");
    }

    #[test]
    fn test_endpoint_keeps_scheme_and_strips_slash() {
        assert_eq!(
            Endpoint::parse("http://localhost:9000/").unwrap().as_str(),
            "http://localhost:9000"
        );
        assert_eq!(
            Endpoint::parse("https://api.example.com//").unwrap().as_str(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_endpoint_rejects_empty() {
        assert!(Endpoint::parse("").is_err());
        assert!(Endpoint::parse("   ").is_err());
    }

    #[test]
    fn test_url_for() {
        let endpoint = Endpoint::parse("http://localhost:9000").unwrap();
        assert_eq!(
            endpoint.url_for("/session/new", None),
            "http://localhost:9000/session/new"
        );
        assert_eq!(
            endpoint.url_for("/session/close", Some(7)),
            "http://localhost:9000/session/close?sid=7"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("localhost:9000", "secret")
            .unwrap()
            .timeout(Duration::from_secs(5))
            .accept_invalid_certs(false);

        assert_eq!(config.endpoint.as_str(), "https://localhost:9000");
        assert_eq!(config.key, "secret");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.accept_invalid_certs);
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("localhost", "k").unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.accept_invalid_certs);
    }
}
