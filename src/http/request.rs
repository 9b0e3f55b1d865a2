// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Proxied request description and its wire payload

use std::time::Duration;

use serde::Serialize;

use super::headers::Headers;

/// One HTTP call for the service to perform on a session's behalf.
///
/// Fields left as `None` (or empty / zero) are filled from the session's
/// defaults when the request is sent. The request itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Request method
    pub method: String,
    /// Target URL
    pub url: String,
    /// Request body
    pub data: String,
    /// Request headers
    pub header: Option<Headers>,
    /// HTTP/2 pseudo-header order
    pub pheader: Option<Vec<String>>,
    /// Header order on the wire
    pub header_order: Option<Vec<String>>,
    /// Browser profile
    pub navigator: Option<String>,
    /// Upstream proxy URL
    pub proxy: Option<String>,
    /// Follow redirects
    pub allow_redirect: bool,
    /// Upstream timeout
    pub timeout: Option<Duration>,
    /// Accept HTTP/2 server push
    pub server_push: bool,
    /// Verify the upstream certificate
    pub verify: bool,
}

impl Request {
    /// Create a new request with arbitrary method
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            allow_redirect: true,
            verify: true,
            ..Default::default()
        }
    }

    /// Create a new GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Create a new POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Set a header, overriding the session's header map entirely
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.get_or_insert_with(Headers::new).insert(name, value);
        self
    }

    /// Replace the header map
    pub fn headers(mut self, headers: Headers) -> Self {
        self.header = Some(headers);
        self
    }

    /// Set the request body
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Set pseudo-header order
    pub fn pheader<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pheader = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Set header order
    pub fn header_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Set navigator
    pub fn navigator(mut self, navigator: impl Into<String>) -> Self {
        self.navigator = Some(navigator.into());
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set follow redirects
    pub fn allow_redirect(mut self, allow: bool) -> Self {
        self.allow_redirect = allow;
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable server push
    pub fn server_push(mut self, enabled: bool) -> Self {
        self.server_push = enabled;
        self
    }

    /// Set certificate verification
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Fully resolved request as sent to `/session/request`
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct RequestPayload<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub data: &'a str,
    pub pheader: &'a [String],
    pub header: &'a Headers,
    pub header_order: &'a [String],
    pub navigator: &'a str,
    pub proxy: &'a str,
    pub allow_redirect: bool,
    /// Seconds
    pub timeout: u64,
    pub server_push: bool,
    pub verify: bool,
}
