// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content decoding for control-channel responses
//!
//! The service relays whatever encoding it negotiated upstream, so decoding
//! never fails: a body that cannot be decoded is handed back unchanged.

use std::fmt;
use std::io::{self, Read};

use bytes::Bytes;
use tracing::warn;

/// Content-Encoding labels understood by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEncoding {
    /// No encoding header, body is plain
    Identity,
    /// gzip container
    Gzip,
    /// zlib-wrapped deflate
    Deflate,
    /// Brotli stream
    Brotli,
    /// Anything else, kept for diagnostics
    Unknown(String),
}

impl ContentEncoding {
    /// Parse a `content-encoding` header value
    pub fn parse(label: &str) -> Self {
        match label {
            "" => ContentEncoding::Identity,
            "gzip" => ContentEncoding::Gzip,
            "deflate" => ContentEncoding::Deflate,
            "br" => ContentEncoding::Brotli,
            other => ContentEncoding::Unknown(other.to_string()),
        }
    }

    /// Header label for this encoding
    pub fn as_str(&self) -> &str {
        match self {
            ContentEncoding::Identity => "",
            ContentEncoding::Gzip => "gzip",
            ContentEncoding::Deflate => "deflate",
            ContentEncoding::Brotli => "br",
            ContentEncoding::Unknown(label) => label,
        }
    }
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode `body` according to `encoding`.
///
/// Returns the original bytes when the encoding is unknown or the stream is
/// corrupt.
pub fn decompress(body: &[u8], encoding: &ContentEncoding) -> Bytes {
    let decoded = match encoding {
        ContentEncoding::Identity => return Bytes::copy_from_slice(body),
        ContentEncoding::Gzip => decode_gzip(body),
        ContentEncoding::Deflate => decode_deflate(body),
        ContentEncoding::Brotli => decode_brotli(body),
        ContentEncoding::Unknown(label) => {
            warn!(encoding = %label, "Unknown content encoding, returning body as-is");
            return Bytes::copy_from_slice(body);
        }
    };

    match decoded {
        Ok(data) => Bytes::from(data),
        Err(e) => {
            warn!(encoding = %encoding, error = %e, "Failed to decode body, returning raw bytes");
            Bytes::copy_from_slice(body)
        }
    }
}

/// Decode `body` and reinterpret the result as text.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn decompress_body(body: &[u8], encoding: &str) -> String {
    let decoded = decompress(body, &ContentEncoding::parse(encoding));
    String::from_utf8_lossy(&decoded).into_owned()
}

fn decode_gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoded = Vec::new();
    flate2::read::MultiGzDecoder::new(data).read_to_end(&mut decoded)?;
    Ok(decoded)
}

fn decode_deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoded = Vec::new();
    flate2::read::ZlibDecoder::new(data).read_to_end(&mut decoded)?;
    Ok(decoded)
}

fn decode_brotli(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoded = Vec::new();
    brotli::Decompressor::new(data, 4096).read_to_end(&mut decoded)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use flate2::Compression;
    use std::io::Write;

    const PAYLOAD: &str = r#"{"status-code":200,"body":"<html>hello</html>"}"#;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn brotli(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut writer = brotli::CompressorWriter::new(&mut out, 4096, 5, 22);
            writer.write_all(data).unwrap();
        }
        out
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(ContentEncoding::parse(""), ContentEncoding::Identity);
        assert_eq!(ContentEncoding::parse("gzip"), ContentEncoding::Gzip);
        assert_eq!(ContentEncoding::parse("deflate"), ContentEncoding::Deflate);
        assert_eq!(ContentEncoding::parse("br"), ContentEncoding::Brotli);
        assert_eq!(
            ContentEncoding::parse("zstd"),
            ContentEncoding::Unknown("zstd".to_string())
        );
        assert_eq!(ContentEncoding::parse("zstd").to_string(), "zstd");
    }

    #[test]
    fn test_identity() {
        assert_eq!(decompress_body(PAYLOAD.as_bytes(), ""), PAYLOAD);
        assert_eq!(decompress_body(b"", ""), "");
    }

    #[test]
    fn test_round_trip_each_encoding() {
        let data = PAYLOAD.as_bytes();
        assert_eq!(decompress_body(&gzip(data), "gzip"), PAYLOAD);
        assert_eq!(decompress_body(&zlib(data), "deflate"), PAYLOAD);
        assert_eq!(decompress_body(&brotli(data), "br"), PAYLOAD);
    }

    #[test]
    fn test_byte_round_trip_each_encoding() {
        let large: Vec<u8> = (0..256 * 1024u32).map(|i| (i * 31 % 251) as u8).collect();
        let payloads: [&[u8]; 4] = [b"", &[0x00, 0xff, 0xfe, 0x80, 0xc3, 0x28], b"plain", &large];

        for payload in payloads {
            assert_eq!(&decompress(payload, &ContentEncoding::Identity)[..], payload);
            assert_eq!(&decompress(&gzip(payload), &ContentEncoding::Gzip)[..], payload);
            assert_eq!(&decompress(&zlib(payload), &ContentEncoding::Deflate)[..], payload);
            assert_eq!(&decompress(&brotli(payload), &ContentEncoding::Brotli)[..], payload);
        }
    }

    #[test]
    fn test_concatenated_gzip_members() {
        let mut body = gzip(b"hello ");
        body.extend_from_slice(&gzip(b"world"));
        assert_eq!(decompress_body(&body, "gzip"), "hello world");
    }

    #[test]
    fn test_empty_payload_each_encoding() {
        assert_eq!(decompress_body(&gzip(b""), "gzip"), "");
        assert_eq!(decompress_body(&zlib(b""), "deflate"), "");
        assert_eq!(decompress_body(&brotli(b""), "br"), "");
    }

    #[test]
    fn test_empty_body_each_encoding() {
        for encoding in ["gzip", "deflate", "br"] {
            assert_eq!(decompress_body(b"", encoding), "");
        }
    }

    #[test]
    fn test_corrupt_gzip_falls_back() {
        let mut corrupt = gzip(PAYLOAD.as_bytes());
        corrupt[0] = 0x00;
        let decoded = decompress(&corrupt, &ContentEncoding::Gzip);
        assert_eq!(&decoded[..], &corrupt[..]);
    }

    #[test]
    fn test_corrupt_deflate_falls_back() {
        let mut corrupt = zlib(PAYLOAD.as_bytes());
        corrupt[0] = 0x00;
        let decoded = decompress(&corrupt, &ContentEncoding::Deflate);
        assert_eq!(&decoded[..], &corrupt[..]);
    }

    #[test]
    fn test_truncated_brotli_falls_back() {
        let long = PAYLOAD.repeat(200);
        let encoded = brotli(long.as_bytes());
        let truncated = &encoded[..encoded.len() / 2];
        let decoded = decompress(truncated, &ContentEncoding::Brotli);
        assert_eq!(&decoded[..], truncated);
    }

    #[test]
    fn test_plain_text_labelled_gzip_is_returned() {
        assert_eq!(decompress_body(b"not compressed", "gzip"), "not compressed");
        assert_eq!(
            decompress_body(b"not compressed", "deflate"),
            "not compressed"
        );
    }

    #[test]
    fn test_unknown_encoding_passthrough() {
        assert_eq!(decompress_body(PAYLOAD.as_bytes(), "zstd"), PAYLOAD);
        assert_eq!(decompress_body(b"x", "GZIP"), "x");
        // compressed bytes with an unknown label stay compressed
        let encoded = gzip(PAYLOAD.as_bytes());
        assert_eq!(
            &decompress(&encoded, &ContentEncoding::parse("x-custom"))[..],
            &encoded[..]
        );
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let text = decompress_body(&[0x61, 0xff, 0x62], "");
        assert_eq!(text, "a\u{fffd}b");
    }
}
