// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Proxied response types

use std::collections::HashMap;

use base64::Engine;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::headers::Headers;
use crate::error::{Error, Result};

/// Response the service received from the upstream target
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Response {
    /// Response status code
    pub status_code: u16,
    /// Final URL
    #[serde(default)]
    pub url: String,
    /// Response headers
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Headers,
    /// Cookies set by the response
    #[serde(default, deserialize_with = "null_as_default")]
    pub cookies: HashMap<String, serde_json::Value>,
    /// Decoded body text
    #[serde(rename = "body", default)]
    pub text: String,
    /// Raw body bytes
    #[serde(skip)]
    pub content: Bytes,
    /// Whether `text` is base64 of a binary body
    #[serde(default)]
    pub is_base64_encoded: bool,
    /// Responses pushed alongside this one
    #[serde(default, deserialize_with = "null_as_default")]
    pub server_push: Vec<Response>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Response {
    /// Parse a response payload and fill in `content`
    pub fn from_json(payload: &str) -> Result<Self> {
        let mut response: Response = serde_json::from_str(payload)?;
        response.fill_content();
        Ok(response)
    }

    fn fill_content(&mut self) {
        self.content = if self.is_base64_encoded {
            match base64::engine::general_purpose::STANDARD.decode(self.text.as_bytes()) {
                Ok(bytes) => Bytes::from(bytes),
                Err(e) => {
                    warn!(url = %self.url, error = %e, "Body flagged as base64 but failed to decode");
                    Bytes::from(self.text.clone().into_bytes())
                }
            }
        } else {
            Bytes::from(self.text.clone().into_bytes())
        };

        for pushed in &mut self.server_push {
            pushed.fill_content();
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Get a header value, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Parse body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.content).map_err(Error::from)
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &Bytes {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let resp = Response::from_json(
            r#"{
                "status-code": 200,
                "url": "https://example.com/",
                "headers": {"Content-Type": "application/json"},
                "cookies": {"sid": "abc"},
                "body": "{\"ok\":true}",
                "is-base64-encoded": false,
                "server-push": null
            }"#,
        )
        .unwrap();

        assert!(resp.is_success());
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.cookies["sid"], "abc");
        assert!(resp.server_push.is_empty());
        assert_eq!(&resp.content[..], br#"{"ok":true}"#);

        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["ok"], true);
    }

    #[test]
    fn test_base64_content() {
        let resp = Response::from_json(
            r#"{"status-code":200,"body":"AAEC/w==","is-base64-encoded":true}"#,
        )
        .unwrap();
        assert_eq!(&resp.content[..], &[0x00, 0x01, 0x02, 0xff]);
        assert_eq!(resp.text, "AAEC/w==");
    }

    #[test]
    fn test_bad_base64_keeps_text() {
        let resp =
            Response::from_json(r#"{"status-code":200,"body":"%%%","is-base64-encoded":true}"#)
                .unwrap();
        assert_eq!(&resp.content[..], b"%%%");
    }

    #[test]
    fn test_server_push_nested() {
        let resp = Response::from_json(
            r#"{"status-code":200,"body":"main","server-push":[{"status-code":200,"url":"https://example.com/style.css","body":"css"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.server_push.len(), 1);
        assert_eq!(&resp.server_push[0].content[..], b"css");
    }

    #[test]
    fn test_error_shape_is_not_a_response() {
        let err = Response::from_json(r#"{"success":false,"error":"invalid url"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
