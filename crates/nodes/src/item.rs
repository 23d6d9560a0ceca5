//! Items flowing into and out of a node.
//!
//! A node receives a batch of [`InputItem`]s and produces exactly one
//! [`OutputItem`] per input it processed, tagged with the index of the
//! input it came from so downstream nodes can pair them back up.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// A named binary attachment carried by an input item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryData {
    /// Raw file content.
    pub data: Vec<u8>,
    /// Original file name, if the producer knew it.
    pub file_name: Option<String>,
    /// MIME type of `data`.
    pub mime_type: String,
}

impl BinaryData {
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            file_name: None,
            mime_type: mime_type.into(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// One record handed to a node by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputItem {
    /// The item's JSON payload.
    pub json: Value,
    /// Binary attachments keyed by property name.
    pub binary: HashMap<String, BinaryData>,
}

impl InputItem {
    pub fn new(json: Value) -> Self {
        Self {
            json,
            binary: HashMap::new(),
        }
    }

    /// Attach binary data under `property`.
    pub fn with_binary(mut self, property: impl Into<String>, data: BinaryData) -> Self {
        self.binary.insert(property.into(), data);
        self
    }

    /// The attachment stored under `property`, if any.
    pub fn binary_data(&self, property: &str) -> Option<&BinaryData> {
        self.binary.get(property)
    }
}

/// What happened to a single input item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOutcome {
    /// The raw response returned by the remote call.
    Result(Value),
    /// The error message recorded under continue-on-failure.
    Error(String),
}

/// One record emitted by a node.
///
/// Serialises as `{"pairedItem": 0, "result": …}` or
/// `{"pairedItem": 0, "error": "…"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputItem {
    /// Index of the input item this record belongs to.
    #[serde(rename = "pairedItem")]
    pub paired_item: usize,
    #[serde(flatten)]
    pub outcome: ItemOutcome,
}

impl OutputItem {
    pub fn success(paired_item: usize, response: Value) -> Self {
        Self {
            paired_item,
            outcome: ItemOutcome::Result(response),
        }
    }

    pub fn failure(paired_item: usize, message: impl Into<String>) -> Self {
        Self {
            paired_item,
            outcome: ItemOutcome::Error(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn output_items_serialise_with_pairing_tag() {
        let ok = OutputItem::success(0, json!({ "id": 7 }));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "pairedItem": 0, "result": { "id": 7 } })
        );

        let failed = OutputItem::failure(3, "404 - not found");
        assert!(failed.is_error());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "pairedItem": 3, "error": "404 - not found" })
        );
    }

    #[test]
    fn binary_lookup_is_by_property_name() {
        let item = InputItem::new(json!({}))
            .with_binary("data", BinaryData::new(b"hello".to_vec(), "text/plain").with_file_name("a.txt"));

        let data = item.binary_data("data").expect("attachment present");
        assert_eq!(data.file_name.as_deref(), Some("a.txt"));
        assert!(item.binary_data("other").is_none());
    }
}
