//! Extracting schema ID.
use serde_json::Value;

pub(crate) fn dollar_id(contents: &Value) -> Option<&str> {
    contents
        .as_object()
        .and_then(|obj| obj.get("$id"))
        .and_then(|id| id.as_str())
}
