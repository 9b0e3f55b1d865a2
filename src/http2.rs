// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP/2 tuning values applied to a remote session

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest legal WINDOW_UPDATE increment (2^31-1)
pub const MAX_WINDOW_INCREMENT: u32 = (1 << 31) - 1;

/// SETTINGS parameter name.
///
/// Unrecognized names are kept verbatim; the service validates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingName {
    HeaderTableSize,
    EnablePush,
    MaxConcurrentStreams,
    InitialWindowSize,
    MaxFrameSize,
    MaxHeaderListSize,
    Other(String),
}

impl SettingName {
    pub fn as_str(&self) -> &str {
        match self {
            SettingName::HeaderTableSize => "HEADER_TABLE_SIZE",
            SettingName::EnablePush => "ENABLE_PUSH",
            SettingName::MaxConcurrentStreams => "MAX_CONCURRENT_STREAMS",
            SettingName::InitialWindowSize => "INITIAL_WINDOW_SIZE",
            SettingName::MaxFrameSize => "MAX_FRAME_SIZE",
            SettingName::MaxHeaderListSize => "MAX_HEADER_LIST_SIZE",
            SettingName::Other(name) => name,
        }
    }
}

impl From<&str> for SettingName {
    fn from(name: &str) -> Self {
        match name {
            "HEADER_TABLE_SIZE" => SettingName::HeaderTableSize,
            "ENABLE_PUSH" => SettingName::EnablePush,
            "MAX_CONCURRENT_STREAMS" => SettingName::MaxConcurrentStreams,
            "INITIAL_WINDOW_SIZE" => SettingName::InitialWindowSize,
            "MAX_FRAME_SIZE" => SettingName::MaxFrameSize,
            "MAX_HEADER_LIST_SIZE" => SettingName::MaxHeaderListSize,
            other => SettingName::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SettingName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SettingName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(SettingName::from(name.as_str()))
    }
}

/// One SETTINGS entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Http2Setting {
    pub name: SettingName,
    pub value: u32,
}

impl Http2Setting {
    pub fn new(name: impl Into<SettingName>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// PRIORITY information for one stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StreamInformation {
    pub stream_id: u32,
    /// Stream this one depends on
    pub stream_dep: u32,
    pub exclusive: bool,
    pub weight: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_names_round_trip_text() {
        for name in [
            "HEADER_TABLE_SIZE",
            "ENABLE_PUSH",
            "MAX_CONCURRENT_STREAMS",
            "INITIAL_WINDOW_SIZE",
            "MAX_FRAME_SIZE",
            "MAX_HEADER_LIST_SIZE",
        ] {
            let parsed = SettingName::from(name);
            assert!(!matches!(parsed, SettingName::Other(_)));
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_setting_passes_through() {
        let setting = Http2Setting::new("ENABLE_CONNECT_PROTOCOL", 1);
        assert_eq!(
            setting.name,
            SettingName::Other("ENABLE_CONNECT_PROTOCOL".to_string())
        );
        assert_eq!(
            serde_json::to_string(&setting).unwrap(),
            r#"{"name":"ENABLE_CONNECT_PROTOCOL","value":1}"#
        );
    }

    #[test]
    fn test_setting_wire_format() {
        let setting = Http2Setting::new(SettingName::InitialWindowSize, 6_291_456);
        assert_eq!(
            serde_json::to_string(&setting).unwrap(),
            r#"{"name":"INITIAL_WINDOW_SIZE","value":6291456}"#
        );
    }

    #[test]
    fn test_stream_information_wire_format() {
        let stream = StreamInformation {
            stream_id: 3,
            stream_dep: 0,
            exclusive: false,
            weight: 200,
        };
        let json = serde_json::to_value(stream).unwrap();
        assert_eq!(json["stream-id"], 3);
        assert_eq!(json["stream-dep"], 0);
        assert_eq!(json["weight"], 200);
    }

    #[test]
    fn test_max_window_increment() {
        assert_eq!(MAX_WINDOW_INCREMENT, 2_147_483_647);
    }
}
