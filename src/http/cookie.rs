// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie value exchanged with the service

use serde::{Deserialize, Serialize};

/// A single HTTP cookie as stored by a remote session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Path the cookie is valid for
    pub path: String,
    /// Domain the cookie belongs to
    pub domain: String,
    /// Expiry date as sent by the server, empty for session cookies
    pub expires: String,
    /// Max-Age in seconds, 0 when absent
    pub max_age: i64,
    /// Secure flag (HTTPS only)
    pub secure: bool,
    /// HttpOnly flag (not accessible via JavaScript)
    pub http_only: bool,
}

impl Cookie {
    /// Create a new cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            ..Default::default()
        }
    }

    /// Set the domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the expiry date
    pub fn expires(mut self, expires: impl Into<String>) -> Self {
        self.expires = expires.into();
        self
    }

    /// Set max-age
    pub fn max_age(mut self, max_age: i64) -> Self {
        self.max_age = max_age;
        self
    }

    /// Set secure flag
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set http_only flag
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let cookie = Cookie::new("session", "abc123")
            .domain("example.com")
            .secure(true)
            .http_only(true)
            .max_age(3600);

        let json = serde_json::to_value(&cookie).unwrap();
        assert_eq!(json["name"], "session");
        assert_eq!(json["path"], "/");
        assert_eq!(json["max-age"], 3600);
        assert_eq!(json["http-only"], true);
        assert_eq!(json["expires"], "");
    }

    #[test]
    fn test_parse_from_service() {
        let cookie: Cookie = serde_json::from_str(
            r#"{"name":"a","value":"b","path":"/","domain":"example.com","expires":"","max-age":0,"secure":false,"http-only":true}"#,
        )
        .unwrap();

        assert_eq!(cookie.name, "a");
        assert_eq!(cookie.domain, "example.com");
        assert!(cookie.http_only);
        assert_eq!(cookie.value, "b");
    }

    #[test]
    fn test_missing_fields_default() {
        let cookie: Cookie = serde_json::from_str(r#"{"name":"a","value":"b"}"#).unwrap();
        assert_eq!(cookie.path, "");
        assert_eq!(cookie.max_age, 0);
        assert!(!cookie.secure);
    }
}
