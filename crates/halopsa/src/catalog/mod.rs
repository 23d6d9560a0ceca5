//! The Halo PSA resource catalog.
//!
//! A static, read-only table of every resource the node exposes, the
//! operations available on each, and how each operation maps onto the REST
//! API (method, endpoint template, fields). The table itself lives in
//! `resources.rs`; this module holds the types and lookups.

mod resources;

use serde::Serialize;

use nodes::NodeError;
pub use nodes::HttpMethod;

/// A group of related operations (e.g. "Tickets").
#[derive(Debug, Serialize)]
pub struct Resource {
    /// Identifier used in node parameters.
    pub value: &'static str,
    /// Display label.
    pub name: &'static str,
    pub description: &'static str,
    pub operations: &'static [Operation],
}

/// One REST call the node can make.
#[derive(Debug, Serialize)]
pub struct Operation {
    /// Identifier used in node parameters; unique within its resource.
    pub value: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Short imperative label ("Create a ticket").
    pub action: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base URL; may contain `{name}` placeholders.
    pub endpoint: &'static str,
    pub fields: &'static [Field],
}

/// Value type of a user-supplied field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    DateTime,
    /// One of a fixed set of string values.
    Options(&'static [&'static str]),
}

/// Where a field's value ends up in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldBinding {
    /// Substituted into the endpoint placeholder of this name.
    Path(&'static str),
    /// Merged into the query (GET) or body (writes) via `simpleFields`.
    Simple,
}

/// Metadata for one user-supplied input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub description: &'static str,
    pub binding: FieldBinding,
}

impl Field {
    const fn path(name: &'static str, placeholder: &'static str, description: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            required: true,
            description,
            binding: FieldBinding::Path(placeholder),
        }
    }

    const fn simple(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            name,
            field_type,
            required: false,
            description,
            binding: FieldBinding::Simple,
        }
    }
}

impl Operation {
    /// Placeholder names in `endpoint`, in order of appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.endpoint;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else { break };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// The field bound to `placeholder`, if one is declared.
    pub fn path_field(&self, placeholder: &str) -> Option<&'static Field> {
        self.fields
            .iter()
            .find(|f| matches!(f.binding, FieldBinding::Path(name) if name == placeholder))
    }

    /// Fields merged through `simpleFields`.
    pub fn simple_fields(&self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|f| f.binding == FieldBinding::Simple)
    }
}

/// How the dispatcher assembles the request for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// GET: query string from additional fields, filters and JSON query text.
    Filter,
    /// POST/PUT/PATCH: JSON body from simple fields and JSON body text.
    Write,
    /// File upload: multipart when the item carries binary data, else `Write`.
    Attachment,
    /// DELETE: path only.
    Bare,
}

/// Operations that upload the item's binary data as a multipart form.
const UPLOADS: &[(&str, &str)] = &[
    ("attachment", "createAttachment"),
    ("attachment", "uploadAttachmentImage"),
];

/// A resolved `(resource, operation)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub resource: &'static Resource,
    pub operation: &'static Operation,
}

impl Entry {
    pub fn shape(&self) -> RequestShape {
        let key = (self.resource.value, self.operation.value);
        if UPLOADS.contains(&key) {
            return RequestShape::Attachment;
        }
        match self.operation.method {
            HttpMethod::Get => RequestShape::Filter,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => RequestShape::Write,
            HttpMethod::Delete => RequestShape::Bare,
        }
    }
}

/// Every resource, in display order.
pub fn resources() -> &'static [Resource] {
    resources::RESOURCES
}

/// The resource identified by `value`.
pub fn resource(value: &str) -> Option<&'static Resource> {
    resources::RESOURCES.iter().find(|r| r.value == value)
}

/// Resolve `(resource, operation)` against the catalog.
///
/// # Errors
/// [`NodeError::Configuration`] if either identifier is unknown.
pub fn lookup(resource: &str, operation: &str) -> Result<Entry, NodeError> {
    let res = self::resource(resource)
        .ok_or_else(|| NodeError::Configuration(format!("resource '{resource}' not found")))?;

    let op = res
        .operations
        .iter()
        .find(|o| o.value == operation)
        .ok_or_else(|| {
            NodeError::Configuration(format!(
                "operation '{operation}' not found for resource '{resource}'"
            ))
        })?;

    Ok(Entry {
        resource: res,
        operation: op,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_covers_the_whole_api_surface() {
        assert_eq!(resources().len(), 15);
        let ops: usize = resources().iter().map(|r| r.operations.len()).sum();
        assert_eq!(ops, 56);
    }

    #[test]
    fn identifiers_are_unique() {
        let mut seen = HashSet::new();
        for res in resources() {
            assert!(seen.insert(res.value), "duplicate resource {}", res.value);

            let mut ops = HashSet::new();
            for op in res.operations {
                assert!(ops.insert(op.value), "duplicate operation {}/{}", res.value, op.value);
            }
        }
    }

    #[test]
    fn every_placeholder_has_a_bound_field() {
        for res in resources() {
            for op in res.operations {
                for name in op.placeholders() {
                    let field = op.path_field(name).unwrap_or_else(|| {
                        panic!("{}/{}: no field bound to {{{name}}}", res.value, op.value)
                    });
                    assert!(field.required);
                }
            }
        }
    }

    #[test]
    fn endpoints_are_rooted_paths() {
        for res in resources() {
            for op in res.operations {
                assert!(op.endpoint.starts_with('/'), "{}", op.endpoint);
            }
        }
    }

    #[test]
    fn placeholders_are_parsed_in_order() {
        let entry = lookup("tickets", "getTicket").unwrap();
        assert_eq!(entry.operation.placeholders(), vec!["id"]);
        assert_eq!(entry.operation.path_field("id").unwrap().name, "ticketId");

        let entry = lookup("tickets", "getTickets").unwrap();
        assert!(entry.operation.placeholders().is_empty());
    }

    #[test]
    fn lookup_rejects_unknown_identifiers() {
        assert!(matches!(
            lookup("invoices", "getInvoices"),
            Err(NodeError::Configuration(msg)) if msg.contains("invoices")
        ));
        assert!(matches!(
            lookup("tickets", "getClient"),
            Err(NodeError::Configuration(msg)) if msg.contains("getClient")
        ));
    }

    #[test]
    fn shapes_follow_method_and_upload_table() {
        let shape = |r, o| lookup(r, o).unwrap().shape();
        assert_eq!(shape("tickets", "getTickets"), RequestShape::Filter);
        assert_eq!(shape("client", "createClient"), RequestShape::Write);
        assert_eq!(shape("tickets", "deleteTicket"), RequestShape::Bare);
        assert_eq!(shape("attachment", "createAttachment"), RequestShape::Attachment);
        assert_eq!(shape("attachment", "uploadAttachmentImage"), RequestShape::Attachment);
        assert_eq!(shape("attachment", "getS3PresignedURL"), RequestShape::Write);
    }

    #[test]
    fn simple_fields_exclude_path_fields() {
        let entry = lookup("tickets", "createTicket").unwrap();
        let names: Vec<_> = entry.operation.simple_fields().map(|f| f.name).collect();
        assert!(names.contains(&"summary"));
        assert!(names.contains(&"client_id"));

        let entry = lookup("tickets", "getTicket").unwrap();
        assert_eq!(entry.operation.simple_fields().count(), 0);
    }
}
