//! YAML stream parsing

use crate::document::{DocumentError, InputSource};
use crate::tree::Value;
use serde::Deserialize;

/// Parse one input into a single tree.
///
/// Only the first document of a multi-document stream is read; the rest is
/// ignored. Blank input parses as `null`.
pub fn parse_document(text: &str, source: &InputSource) -> Result<Value, DocumentError> {
    let first = serde_yaml::Deserializer::from_str(text).next();
    let value = match first {
        Some(document) => deserialize(document, source)?,
        None => Value::Null,
    };
    tracing::debug!(input = %source, "parsed input");
    Ok(value)
}

/// Parse every document in a YAML stream, in stream order.
///
/// Empty documents are kept as `null`; blank input yields a single `null`.
pub fn parse_documents(text: &str, source: &InputSource) -> Result<Vec<Value>, DocumentError> {
    let mut documents = serde_yaml::Deserializer::from_str(text)
        .map(|document| deserialize(document, source))
        .collect::<Result<Vec<_>, _>>()?;
    if documents.is_empty() {
        documents.push(Value::Null);
    }
    tracing::debug!(input = %source, documents = documents.len(), "parsed input stream");
    Ok(documents)
}

fn deserialize(
    document: serde_yaml::Deserializer<'_>,
    source: &InputSource,
) -> Result<Value, DocumentError> {
    Value::deserialize(document)
        .map_err(|err| DocumentError::Parse { input: source.to_string(), source: err })
}
