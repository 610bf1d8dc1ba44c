//! Serializing the merged tree

use crate::document::DocumentError;
use crate::domain::OutputFormat;
use crate::tree::Value;

/// Render the merged tree. An absent result (no documents) renders as `null`.
pub fn render(value: Option<&Value>, format: OutputFormat) -> Result<String, DocumentError> {
    let null = Value::Null;
    let value = value.unwrap_or(&null);

    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(DocumentError::SerializeYaml),
        OutputFormat::Json => {
            let mut text =
                serde_json::to_string_pretty(value).map_err(DocumentError::SerializeJson)?;
            text.push('\n');
            Ok(text)
        }
    }
}
