//! Decoding of input documents into UTF-8 text.
//!
//! Configuration fragments come from editors and tools with different habits:
//! - BOM-prefixed files (UTF-8, UTF-16 LE/BE) are decoded per their BOM
//! - valid UTF-8 takes the fast path
//! - anything else goes through chardetng and is decoded with replacement characters

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decode raw input bytes to a `String`.
///
/// Never fails: malformed sequences in legacy encodings are replaced with U+FFFD
/// and a warning is logged.
pub fn decode_bytes(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(encoding = encoding.name(), "decoding input by byte order mark");
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!(encoding = encoding.name(), "input is not UTF-8, using detected encoding");

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!("input contained bytes invalid for {}; replaced them", used.name());
    }
    text.into_owned()
}
