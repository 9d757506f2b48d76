//! Request/response serializer negotiation.
//!
//! Only JSON is registered, so negotiation either yields [`JsonSerializer`]
//! or reports that nothing handles the requested content type.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub trait Encoder {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;
}

pub trait Decoder {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T>;
}

pub trait ClientNegotiator {
    type Enc: Encoder;
    type Dec: Decoder;

    fn encoder(&self) -> Result<Self::Enc>;
    fn decoder(&self) -> Result<Self::Dec>;
    fn stream_decoder(&self) -> Result<Self::Dec>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Encoder for JsonSerializer {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value)
            .map_err(|e| Error::internal_json(e.to_string(), Some("encode".to_string())))
    }
}

impl Decoder for JsonSerializer {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        serde_json::from_slice(data)
            .map_err(|e| Error::internal_json(e.to_string(), Some("decode".to_string())))
    }
}

/// Negotiates a single JSON serializer regardless of what was asked for.
/// Meant for tests and for callers that control both ends of the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleClientNegotiator;

impl ClientNegotiator for SimpleClientNegotiator {
    type Enc = JsonSerializer;
    type Dec = JsonSerializer;

    fn encoder(&self) -> Result<JsonSerializer> {
        Ok(JsonSerializer)
    }

    fn decoder(&self) -> Result<JsonSerializer> {
        Ok(JsonSerializer)
    }

    fn stream_decoder(&self) -> Result<JsonSerializer> {
        Err(Error::negotiate_no_serializer(CONTENT_TYPE_JSON, true))
    }
}

/// Pick the serializer for a `Content-Type` value. Media type parameters
/// (`; charset=utf-8`) are ignored.
pub fn negotiate(content_type: &str) -> Result<JsonSerializer> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    if media_type.eq_ignore_ascii_case(CONTENT_TYPE_JSON) {
        Ok(JsonSerializer)
    } else {
        Err(Error::negotiate_no_serializer(content_type, false))
    }
}
