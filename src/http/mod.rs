// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for tlsremote
//!
//! Wire types exchanged with the proxy service and the transport that
//! carries them.

mod cookie;
mod headers;
mod request;
mod response;
mod transport;

pub use cookie::Cookie;
pub use headers::Headers;
pub use request::Request;
pub(crate) use request::RequestPayload;
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// Control-channel endpoint paths
pub mod paths {
    pub const PING: &str = "/";
    pub const SESSION_NEW: &str = "/session/new";
    pub const COOKIES: &str = "/session/cookies";
    pub const COOKIES_SET: &str = "/session/cookies/set";
    pub const CLOSE: &str = "/session/close";
    pub const KEEP_ALIVE: &str = "/session/keep-alive";
    pub const JA3: &str = "/session/tls/ja3";
    pub const HTTP2_SETTINGS: &str = "/session/http2/settings";
    pub const HTTP2_WINDOWS_UPDATE: &str = "/session/http2/windows-update";
    pub const HTTP2_STREAM_PRIORITIES: &str = "/session/http2/stream-priorities";
    pub const REQUEST: &str = "/session/request";
}

/// Header names used on the control channel
pub mod header_names {
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const CONTENT_ENCODING: &str = "content-encoding";
}
