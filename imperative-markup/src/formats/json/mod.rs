//! JSON tree dump
//!
//! Serialize-only. Writes the tree through its `serde::Serialize` derive, so the output shape
//! follows the tree types: `{"element": {"tag": ..., "namespace": ..., "attributes": [...],
//! "children": [...]}}` and `{"text": "..."}`.

use crate::dom::Fragment;
use crate::error::FormatError;
use crate::format::Format;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON dump of the element tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Fragment) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
    }
}
