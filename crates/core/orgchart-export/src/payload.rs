//! Export payload decoding
//!
//! The front end hands over either a full data URL
//! (`data:<mime>;base64,<payload>`) or a bare base64 string.

use crate::error::{ExportError, ExportResult};
use base64::{
    alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use std::borrow::Cow;

const DATA_URL_PREFIX: &str = "data:";

/// Standard alphabet, padding required, nonzero trailing bits tolerated
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a data URL or raw base64 payload into bytes.
///
/// Line breaks (`\r`, `\n`) inside the base64 text are skipped, so wrapped
/// MIME-style payloads decode. No interpretation of the media type happens
/// here; the decoded bytes are returned as-is.
pub fn decode_payload(input: &str) -> ExportResult<Vec<u8>> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(ExportError::EmptyPayload);
    }

    let encoded = if raw.starts_with(DATA_URL_PREFIX) {
        match raw.find(',') {
            Some(idx) if idx + 1 < raw.len() => &raw[idx + 1..],
            _ => return Err(ExportError::MalformedDataUrl),
        }
    } else {
        raw
    };

    let encoded: Cow<'_, str> = if encoded.contains(['\r', '\n']) {
        Cow::Owned(encoded.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(encoded)
    };

    Ok(PAYLOAD_ENGINE.decode(encoded.as_bytes())?)
}
