//! Typed node parameters.
//!
//! The host hands over one raw JSON object per item. It is deserialised once
//! into [`ItemParameters`] and then narrowed, according to the catalog's
//! [`RequestShape`], into an [`OperationParams`] that only carries what that
//! kind of request can use.

use serde::Deserialize;
use serde_json::{Map, Value};

use nodes::NodeError;

use crate::catalog::RequestShape;

/// Default name of the binary property holding an attachment.
pub const DEFAULT_BINARY_PROPERTY: &str = "data";

fn default_binary_property() -> String {
    DEFAULT_BINARY_PROPERTY.to_owned()
}

/// JSON entered either as text (a JSON editor field) or as an already
/// parsed value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JsonText {
    Text(String),
    Value(Value),
}

impl JsonText {
    /// Parse the content. Blank text and `null` yield `None`.
    ///
    /// # Errors
    /// [`NodeError::Input`] if the text is not valid JSON.
    pub fn parse(&self, field: &str) -> Result<Option<Value>, NodeError> {
        match self {
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(|e| NodeError::Input(format!("'{field}' is not valid JSON: {e}"))),
            Self::Value(Value::Null) => Ok(None),
            Self::Value(value) => Ok(Some(value.clone())),
        }
    }

    /// Parse the content and require a JSON object.
    ///
    /// # Errors
    /// [`NodeError::Input`] if the text is not valid JSON or not an object.
    pub fn parse_object(&self, field: &str) -> Result<Option<Map<String, Value>>, NodeError> {
        match self.parse(field)? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(NodeError::Input(format!(
                "'{field}' must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Right-biased merge: keys from `source` overwrite keys in `target`.
pub fn merge_into(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        target.insert(key, value);
    }
}

/// Optional GET modifiers from the "Additional Fields" collection.
///
/// Modifiers such as `includedetails`, `page`, `pagesize`, `orderby` and
/// `orderdesc` are kept exactly as the host bound them (an expression may
/// well yield `"25"` instead of `25`) and go to the query untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdditionalFields {
    /// Free-form query parameters as a JSON object.
    #[serde(rename = "queryParameters")]
    pub query_parameters: Option<JsonText>,
    #[serde(rename = "customQueryParameters")]
    pub custom_query_parameters: Option<JsonText>,
    /// Every other key, passed through to the query string.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw parameter object for one item, as bound by the host.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemParameters {
    pub resource: String,
    pub operation: String,
    #[serde(default)]
    pub additional_fields: AdditionalFields,
    /// "Simple Fields" / "Filters" collection.
    #[serde(default)]
    pub simple_fields: Map<String, Value>,
    /// Whether the top-level `queryParameters` apply.
    #[serde(default)]
    pub json_parameters: bool,
    #[serde(default)]
    pub query_parameters: Option<JsonText>,
    #[serde(default)]
    pub json_request_body: Option<JsonText>,
    #[serde(default = "default_binary_property")]
    pub binary_property_name: String,
    /// Everything else: path parameters such as `ticketId`.
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl ItemParameters {
    /// Deserialise the raw object bound to one item.
    ///
    /// # Errors
    /// - [`NodeError::Configuration`] if `resource` or `operation` is not a
    ///   string; no item can succeed then.
    /// - [`NodeError::Input`] if another key has the wrong type for this
    ///   item (e.g. `simpleFields` bound to a string).
    pub fn from_value(raw: &Value) -> Result<Self, NodeError> {
        for key in ["resource", "operation"] {
            if !raw.get(key).is_some_and(Value::is_string) {
                return Err(NodeError::Configuration(format!(
                    "node parameters need a string '{key}'"
                )));
            }
        }
        Self::deserialize(raw)
            .map_err(|e| NodeError::Input(format!("malformed node parameters: {e}")))
    }

    /// Narrow to what a request of `shape` can use.
    pub fn into_operation_params(self, shape: RequestShape) -> OperationParams {
        let write = || WriteParams {
            simple_fields: self.simple_fields.clone(),
            json_request_body: self.json_request_body.clone(),
        };

        match shape {
            RequestShape::Filter => OperationParams::Filter(FilterParams {
                additional_fields: self.additional_fields.clone(),
                filters: self.simple_fields.clone(),
                query_parameters: if self.json_parameters {
                    self.query_parameters.clone()
                } else {
                    None
                },
            }),
            RequestShape::Write => OperationParams::Write(write()),
            RequestShape::Attachment => OperationParams::Attachment(AttachmentParams {
                write: write(),
                binary_property_name: self.binary_property_name.clone(),
            }),
            RequestShape::Bare => OperationParams::Bare,
        }
    }
}

/// Parameters of a GET request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub additional_fields: AdditionalFields,
    pub filters: Map<String, Value>,
    /// Top-level JSON query parameters, present only when enabled.
    pub query_parameters: Option<JsonText>,
}

impl FilterParams {
    /// Compose the query object.
    ///
    /// Sources are merged in order, later keys winning: additional-field
    /// modifiers as bound, filters, the additional-fields JSON
    /// query text, the custom JSON query text, then the top-level JSON
    /// query parameters.
    ///
    /// # Errors
    /// [`NodeError::Input`] if any JSON text is malformed or not an object.
    pub fn compose_query(&self) -> Result<Map<String, Value>, NodeError> {
        let extra = &self.additional_fields;
        let mut query = extra.extra.clone();
        merge_into(&mut query, self.filters.clone());

        let json_sources = [
            ("additionalFields.queryParameters", &extra.query_parameters),
            ("additionalFields.customQueryParameters", &extra.custom_query_parameters),
            ("queryParameters", &self.query_parameters),
        ];
        for (field, text) in json_sources {
            if let Some(map) = text.as_ref().map(|t| t.parse_object(field)).transpose()?.flatten() {
                merge_into(&mut query, map);
            }
        }

        Ok(query)
    }
}

/// Parameters of a POST/PUT/PATCH request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteParams {
    pub simple_fields: Map<String, Value>,
    pub json_request_body: Option<JsonText>,
}

impl WriteParams {
    /// Compose the JSON body.
    ///
    /// With no simple fields the parsed JSON body is sent exactly as
    /// parsed. Otherwise both must be objects and the JSON body's keys win.
    /// Nothing supplied at all yields `{}`.
    ///
    /// # Errors
    /// [`NodeError::Input`] if the JSON text is malformed, or is not an
    /// object while simple fields need merging.
    pub fn compose_body(&self) -> Result<Value, NodeError> {
        let parsed = match &self.json_request_body {
            Some(text) => text.parse("jsonRequestBody")?,
            None => None,
        };

        if self.simple_fields.is_empty() {
            return Ok(parsed.unwrap_or_else(|| Value::Object(Map::new())));
        }

        let mut body = self.simple_fields.clone();
        match parsed {
            None => {}
            Some(Value::Object(map)) => merge_into(&mut body, map),
            Some(other) => {
                return Err(NodeError::Input(format!(
                    "cannot merge simpleFields into a jsonRequestBody that is {}",
                    json_kind(&other)
                )))
            }
        }
        Ok(Value::Object(body))
    }
}

/// Parameters of an attachment upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentParams {
    /// Used when the item carries no binary data.
    pub write: WriteParams,
    pub binary_property_name: String,
}

/// Per-operation parameters, one variant per [`RequestShape`].
#[derive(Debug, Clone, PartialEq)]
pub enum OperationParams {
    Filter(FilterParams),
    Write(WriteParams),
    Attachment(AttachmentParams),
    Bare,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(raw: Value) -> ItemParameters {
        ItemParameters::from_value(&raw).expect("valid parameters")
    }

    #[test]
    fn defaults_apply_when_keys_are_absent() {
        let p = params(json!({ "resource": "tickets", "operation": "getTickets" }));
        assert_eq!(p.binary_property_name, "data");
        assert!(!p.json_parameters);
        assert!(p.simple_fields.is_empty());
        assert!(p.values.is_empty());
    }

    #[test]
    fn unknown_top_level_keys_are_kept_as_values() {
        let p = params(json!({
            "resource": "tickets",
            "operation": "getTicket",
            "ticketId": "7",
        }));
        assert_eq!(p.values.get("ticketId"), Some(&json!("7")));
    }

    #[test]
    fn missing_resource_is_a_configuration_error() {
        let err = ItemParameters::from_value(&json!({ "operation": "getTickets" })).unwrap_err();
        assert!(matches!(err, NodeError::Configuration(_)));
    }

    #[test]
    fn modifiers_pass_through_as_bound() {
        let p = params(json!({
            "resource": "tickets",
            "operation": "getTickets",
            "additionalFields": { "pagesize": "25", "includedetails": "true", "page": 2 },
        }));
        let OperationParams::Filter(filter) = p.into_operation_params(RequestShape::Filter) else {
            panic!("expected filter params");
        };

        let query = filter.compose_query().unwrap();
        assert_eq!(query["pagesize"], json!("25"));
        assert_eq!(query["includedetails"], json!("true"));
        assert_eq!(query["page"], json!(2));
    }

    #[test]
    fn mistyped_item_parameters_are_input_errors() {
        let err = ItemParameters::from_value(&json!({
            "resource": "tickets",
            "operation": "getTickets",
            "simpleFields": "client_id=12",
        }))
        .unwrap_err();
        assert!(matches!(err, NodeError::Input(_)));

        let err = ItemParameters::from_value(&json!({ "resource": 7, "operation": "getTickets" }))
            .unwrap_err();
        assert!(matches!(err, NodeError::Configuration(_)));
    }

    #[test]
    fn query_merges_sources_right_biased() {
        let p = params(json!({
            "resource": "tickets",
            "operation": "getTickets",
            "additionalFields": {
                "page": 1,
                "pagesize": 50,
                "orderby": "id",
                "queryParameters": "{\"pagesize\": 10, \"search\": \"printer\"}",
            },
            "simpleFields": { "client_id": 12, "page": 2 },
            "jsonParameters": true,
            "queryParameters": { "search": "laptop" },
        }));
        let OperationParams::Filter(filter) = p.into_operation_params(RequestShape::Filter) else {
            panic!("expected filter params");
        };

        let query = filter.compose_query().unwrap();
        assert_eq!(query["page"], json!(2));
        assert_eq!(query["pagesize"], json!(10));
        assert_eq!(query["orderby"], json!("id"));
        assert_eq!(query["client_id"], json!(12));
        assert_eq!(query["search"], json!("laptop"));
    }

    #[test]
    fn top_level_query_parameters_need_the_toggle() {
        let p = params(json!({
            "resource": "tickets",
            "operation": "getTickets",
            "queryParameters": "{\"search\": \"laptop\"}",
        }));
        let OperationParams::Filter(filter) = p.into_operation_params(RequestShape::Filter) else {
            panic!("expected filter params");
        };
        assert!(filter.compose_query().unwrap().is_empty());
    }

    #[test]
    fn merging_the_same_key_twice_keeps_the_last_value() {
        let mut query = Map::new();
        merge_into(&mut query, json!({ "page": 1 }).as_object().unwrap().clone());
        merge_into(&mut query, json!({ "page": 3 }).as_object().unwrap().clone());
        assert_eq!(query["page"], json!(3));

        let snapshot = query.clone();
        merge_into(&mut query, json!({ "page": 3 }).as_object().unwrap().clone());
        assert_eq!(query, snapshot);
    }

    #[test]
    fn malformed_query_json_is_an_input_error() {
        let filter = FilterParams {
            query_parameters: Some(JsonText::Text("{ not json".into())),
            ..Default::default()
        };
        assert!(matches!(filter.compose_query(), Err(NodeError::Input(_))));

        let filter = FilterParams {
            query_parameters: Some(JsonText::Text("[1, 2]".into())),
            ..Default::default()
        };
        assert!(matches!(filter.compose_query(), Err(NodeError::Input(msg)) if msg.contains("array")));
    }

    #[test]
    fn body_is_sent_exactly_as_parsed() {
        let write = WriteParams {
            json_request_body: Some(JsonText::Text(r#"[{"summary":"Printer down"}]"#.into())),
            ..Default::default()
        };
        assert_eq!(write.compose_body().unwrap(), json!([{ "summary": "Printer down" }]));
    }

    #[test]
    fn empty_body_defaults_to_an_empty_object() {
        let write = WriteParams {
            json_request_body: Some(JsonText::Text("   ".into())),
            ..Default::default()
        };
        assert_eq!(write.compose_body().unwrap(), json!({}));
        assert_eq!(WriteParams::default().compose_body().unwrap(), json!({}));
    }

    #[test]
    fn json_body_overrides_simple_fields() {
        let write = WriteParams {
            simple_fields: json!({ "name": "Acme", "email": "ops@acme.test" })
                .as_object()
                .unwrap()
                .clone(),
            json_request_body: Some(JsonText::Text(r#"{"name":"Acme Ltd"}"#.into())),
        };
        assert_eq!(
            write.compose_body().unwrap(),
            json!({ "name": "Acme Ltd", "email": "ops@acme.test" })
        );
    }

    #[test]
    fn malformed_body_json_is_an_input_error() {
        let write = WriteParams {
            json_request_body: Some(JsonText::Text("{\"name\":".into())),
            ..Default::default()
        };
        assert!(matches!(write.compose_body(), Err(NodeError::Input(_))));
    }

    #[test]
    fn shape_selects_the_variant() {
        let raw = json!({
            "resource": "attachment",
            "operation": "createAttachment",
            "binaryPropertyName": "file",
        });
        assert!(matches!(
            params(raw.clone()).into_operation_params(RequestShape::Attachment),
            OperationParams::Attachment(AttachmentParams { binary_property_name, .. }) if binary_property_name == "file"
        ));
        assert_eq!(params(raw).into_operation_params(RequestShape::Bare), OperationParams::Bare);
    }
}
