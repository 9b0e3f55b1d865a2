// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for tlsremote
//!
//! Errors fall into two tiers. Environmental failures (transport, response
//! decoding) are soft: boolean session operations turn them into `Ok(false)`.
//! Misuse (unserializable input, out-of-range values, calls on a closed
//! session) is hard and always surfaces as an `Err`.

use thiserror::Error;

/// Result type alias for tlsremote operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tlsremote
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request to the control service failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Caller-supplied value could not be serialized to JSON
    #[error("Could not encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// WINDOW_UPDATE increment outside the legal range
    #[error(
        "Window update increment {0} out of range: the legal range is 1 to 2^31-1 (2,147,483,647) octets"
    )]
    WindowsUpdateOutOfRange(u32),

    /// The service refused to create a session
    #[error("Session could not be created")]
    SessionCreation,

    /// Operation attempted on a session that was already closed
    #[error("Session {0} has been closed")]
    SessionClosed(u64),

    /// Typed error payload returned by the service
    #[error("API error: {0}")]
    Api(String),

    /// The service did not answer the health ping
    #[error("Service unavailable at {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an encode error for the named input
    pub fn encode(what: &'static str, source: serde_json::Error) -> Self {
        Error::Encode { what, source }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this error signals programmer misuse rather than an
    /// environmental failure
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Error::Encode { .. } | Error::WindowsUpdateOutOfRange(_) | Error::SessionClosed(_)
        )
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_) | Error::ServiceUnavailable(_))
    }

    /// Check if this is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}
