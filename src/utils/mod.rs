//! Shared helpers

pub mod encoding;

pub use encoding::decode_bytes;

/// Split a comma-separated string into trimmed, non-empty segments.
pub fn split_csv(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|part| !part.is_empty()).map(str::to_string).collect()
}
