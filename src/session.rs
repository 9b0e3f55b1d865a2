// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Remote browsing sessions
//!
//! A [`Session`] only exists once the service has assigned it an identifier,
//! so there is no way to call an operation on a session that was never
//! created. After a successful [`Session::close`] every operation fails with
//! [`Error::SessionClosed`] without reaching the network.
//!
//! Boolean operations report environmental failures (transport errors,
//! unreadable replies) as `Ok(false)`. Input that cannot be serialized and
//! local precondition violations are returned as errors.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::http::{paths, Cookie, Headers, Request, RequestPayload, Response, Transport};
use crate::http2::{Http2Setting, StreamInformation, MAX_WINDOW_INCREMENT};

/// Navigator used when none is configured
pub const DEFAULT_NAVIGATOR: &str = "chrome";

/// Upstream timeout used when none is configured
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30);

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Closed,
}

#[derive(Deserialize)]
struct SessionCreated {
    #[serde(default)]
    success: bool,
    #[serde(rename = "session-id", default)]
    session_id: u64,
}

#[derive(Deserialize)]
struct Status {
    #[serde(default)]
    success: bool,
}

#[derive(Deserialize)]
struct ApiError {
    error: String,
}

#[derive(Serialize)]
struct DomainQuery<'a> {
    domain: &'a str,
}

#[derive(Serialize)]
struct Ja3Information<'a, S: ?Sized> {
    ja3: &'a str,
    specifications: &'a S,
    navigator: &'a str,
}

#[derive(Serialize)]
struct SettingsPayload<'a> {
    settings: &'a [Http2Setting],
}

#[derive(Serialize)]
struct WindowsUpdate {
    value: u32,
}

#[derive(Serialize)]
struct StreamsPayload<'a> {
    streams: &'a [StreamInformation],
}

/// Whole seconds for the wire; any fraction rounds up so a nonzero
/// timeout is never sent as 0
fn wire_seconds(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

fn encode<T: Serialize + ?Sized>(what: &'static str, value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(|e| Error::encode(what, e))
}

/// A browsing context held by the remote service.
///
/// The public fields are defaults merged into every [`Request`] that leaves
/// the corresponding field unset.
pub struct Session {
    id: u64,
    state: SessionState,
    transport: Arc<dyn Transport>,

    /// Default request headers
    pub header: Headers,
    /// Default pseudo-header order
    pub pheader: Vec<String>,
    /// Default header order
    pub header_order: Vec<String>,
    /// Browser profile
    pub navigator: String,
    /// Local cookie cache, name -> value. The service holds the real jar.
    pub cookies: HashMap<String, String>,
    /// Default upstream timeout
    pub timeout: Duration,
    /// Default upstream proxy
    pub proxy: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("header", &self.header)
            .field("pheader", &self.pheader)
            .field("header_order", &self.header_order)
            .field("navigator", &self.navigator)
            .field("cookies", &self.cookies)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl Session {
    fn new(id: u64, transport: Arc<dyn Transport>) -> Self {
        Self {
            id,
            state: SessionState::Active,
            transport,
            header: Headers::new(),
            pheader: Vec::new(),
            header_order: Vec::new(),
            navigator: DEFAULT_NAVIGATOR.to_string(),
            cookies: HashMap::new(),
            timeout: DEFAULT_SESSION_TIMEOUT,
            proxy: None,
        }
    }

    /// Ask the service for a new session
    pub(crate) async fn create(transport: Arc<dyn Transport>) -> Result<Self> {
        let reply = transport
            .call(paths::SESSION_NEW, None, Bytes::new())
            .await?;
        debug!(reply = %reply, "Session creation reply");

        let created: SessionCreated = serde_json::from_str(&reply)?;
        if !created.success || created.session_id == 0 {
            warn!(success = created.success, "Service refused to create a session");
            return Err(Error::SessionCreation);
        }

        info!(sid = created.session_id, "Session created");
        Ok(Self::new(created.session_id, transport))
    }

    /// Identifier assigned by the service
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Closed => Err(Error::SessionClosed(self.id)),
        }
    }

    /// Send a command whose reply is a `{"success": bool}` status
    async fn call_status(&self, path: &'static str, body: Bytes) -> Result<bool> {
        self.ensure_active()?;

        let reply = match self.transport.call(path, Some(self.id), body).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(sid = self.id, path, error = %e, "Control call failed");
                return Ok(false);
            }
        };

        match serde_json::from_str::<Status>(&reply) {
            Ok(status) => Ok(status.success),
            Err(e) => {
                warn!(sid = self.id, path, error = %e, "Unreadable status reply");
                Ok(false)
            }
        }
    }

    /// Cookies the service holds for `domain`
    pub async fn get_cookies(&mut self, domain: &str) -> Result<Vec<Cookie>> {
        self.ensure_active()?;

        let body = encode("cookie query", &DomainQuery { domain })?;
        let reply = self
            .transport
            .call(paths::COOKIES, Some(self.id), body)
            .await?;

        let cookies: Vec<Cookie> = serde_json::from_str(&reply)?;
        for cookie in &cookies {
            self.cookies.insert(cookie.name.clone(), cookie.value.clone());
        }
        Ok(cookies)
    }

    /// Store cookies in the remote session
    pub async fn set_cookies(&mut self, cookies: &[Cookie]) -> Result<bool> {
        let body = encode("cookies", cookies)?;
        let applied = self.call_status(paths::COOKIES_SET, body).await?;

        if applied {
            for cookie in cookies {
                self.cookies.insert(cookie.name.clone(), cookie.value.clone());
            }
        }
        Ok(applied)
    }

    /// Close the remote session. On success the session becomes unusable.
    pub async fn close(&mut self) -> Result<bool> {
        let closed = self.call_status(paths::CLOSE, Bytes::new()).await?;
        if closed {
            self.state = SessionState::Closed;
            info!(sid = self.id, "Session closed");
        }
        Ok(closed)
    }

    /// Ask the service to keep the session up
    pub async fn keep_alive(&self) -> Result<bool> {
        self.call_status(paths::KEEP_ALIVE, Bytes::new()).await
    }

    /// Apply a JA3 fingerprint and its extension specifications
    pub async fn apply_ja3<S>(&self, ja3: &str, specifications: &S) -> Result<bool>
    where
        S: Serialize + ?Sized,
    {
        let body = encode(
            "JA3 specifications",
            &Ja3Information {
                ja3,
                specifications,
                navigator: &self.navigator,
            },
        )?;
        self.call_status(paths::JA3, body).await
    }

    /// Apply HTTP/2 SETTINGS (HTTP/2 requests only)
    pub async fn apply_http2_settings(&self, settings: &[Http2Setting]) -> Result<bool> {
        let body = encode("HTTP/2 settings", &SettingsPayload { settings })?;
        self.call_status(paths::HTTP2_SETTINGS, body).await
    }

    /// Apply the connection WINDOW_UPDATE increment (HTTP/2 requests only).
    ///
    /// `value` must be in `1..=2^31-1`; anything else fails without a call.
    pub async fn apply_windows_update(&self, value: u32) -> Result<bool> {
        if !(1..=MAX_WINDOW_INCREMENT).contains(&value) {
            return Err(Error::WindowsUpdateOutOfRange(value));
        }

        let body = encode("window update", &WindowsUpdate { value })?;
        self.call_status(paths::HTTP2_WINDOWS_UPDATE, body).await
    }

    /// Apply stream PRIORITY information (HTTP/2 requests only)
    pub async fn apply_stream_priorities(&self, streams: &[StreamInformation]) -> Result<bool> {
        let body = encode("stream priorities", &StreamsPayload { streams })?;
        self.call_status(paths::HTTP2_STREAM_PRIORITIES, body).await
    }

    /// Merge `request` with this session's defaults
    fn payload<'a>(&'a self, request: &'a Request) -> RequestPayload<'a> {
        RequestPayload {
            method: &request.method,
            url: &request.url,
            data: &request.data,
            pheader: request.pheader.as_deref().unwrap_or(&self.pheader),
            header: request.header.as_ref().unwrap_or(&self.header),
            header_order: request.header_order.as_deref().unwrap_or(&self.header_order),
            navigator: request
                .navigator
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or(&self.navigator),
            proxy: request
                .proxy
                .as_deref()
                .filter(|p| !p.is_empty())
                .or(self.proxy.as_deref())
                .unwrap_or(""),
            allow_redirect: request.allow_redirect,
            timeout: wire_seconds(
                request
                    .timeout
                    .filter(|t| !t.is_zero())
                    .unwrap_or(self.timeout),
            ),
            server_push: request.server_push,
            verify: request.verify,
        }
    }

    /// Have the service perform `request` through this session.
    ///
    /// A reply that is not a response but carries `{"error": ...}` becomes
    /// [`Error::Api`]; anything else unreadable is [`Error::Decode`].
    pub async fn execute(&self, request: &Request) -> Result<Response> {
        self.ensure_active()?;

        let body = encode("request", &self.payload(request))?;
        debug!(sid = self.id, method = %request.method, url = %request.url, "Forwarding request");

        let reply = self
            .transport
            .call(paths::REQUEST, Some(self.id), body)
            .await?;

        match Response::from_json(&reply) {
            Ok(response) => Ok(response),
            Err(Error::Decode(decode_err)) => match serde_json::from_str::<ApiError>(&reply) {
                Ok(api) => Err(Error::Api(api.error)),
                Err(_) => Err(Error::Decode(decode_err)),
            },
            Err(e) => Err(e),
        }
    }

    /// GET `url` with session defaults
    pub async fn get(&self, url: impl Into<String>) -> Result<Response> {
        self.execute(&Request::get(url)).await
    }

    /// POST `data` to `url` with session defaults
    pub async fn post(&self, url: impl Into<String>, data: impl Into<String>) -> Result<Response> {
        self.execute(&Request::post(url).data(data)).await
    }
}
