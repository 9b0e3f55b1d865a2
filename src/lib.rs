// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # tlsremote - Remote control for a TLS-fingerprinting proxy
//!
//! Drives a separately running proxy service over JSON-over-HTTP. The service
//! performs the TLS handshakes, HTTP/2 framing and JA3 impersonation; this
//! crate creates sessions on it, tunes them and forwards requests.
//!
//! ## Features
//!
//! - Sessions: create, keep alive, close
//! - Cookies: read and seed the remote cookie jar
//! - TLS: apply JA3 strings with extension specifications
//! - HTTP/2: SETTINGS, WINDOW_UPDATE and stream priorities
//! - Requests: per-request overrides merged with session defaults
//! - Content decoding: gzip, deflate and Brotli replies, never failing
//!
//! ## Example
//!
//! ```rust,no_run
//! use tlsremote::{ClientConfig, RemoteClient, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("127.0.0.1:8080", "my-key")?;
//!     let client = RemoteClient::connect(config).await?;
//!
//!     let mut session = client.new_session().await?;
//!     session.header.insert("user-agent", "Mozilla/5.0");
//!
//!     let response = session.execute(&Request::get("https://example.com")).await?;
//!     println!("{} {}", response.status_code, response.text.len());
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod compression;
pub mod config;
pub mod error;
pub mod http;
pub mod http2;
pub mod session;

// Re-exports for convenience

// Client and sessions
pub use client::RemoteClient;
pub use session::{Session, SessionState, DEFAULT_NAVIGATOR, DEFAULT_SESSION_TIMEOUT};

// Configuration
pub use config::{ClientConfig, Endpoint};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{Cookie, Headers, HttpTransport, Request, Response, Transport};

// HTTP/2
pub use http2::{Http2Setting, SettingName, StreamInformation, MAX_WINDOW_INCREMENT};

// Content decoding
pub use compression::{decompress, decompress_body, ContentEncoding};

/// tlsremote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
