use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Decode standard-alphabet, padded base64.
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(input)
        .map_err(|e| Error::validation_invalid_base64(e.to_string()))
}
