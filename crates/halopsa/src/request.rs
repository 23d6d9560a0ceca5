//! Turning a catalog entry plus one item's parameters into an `HttpRequest`.

use serde_json::{Map, Value};

use nodes::{FilePart, HttpRequest, InputItem, NodeError, RequestBody};

use crate::catalog::{Entry, Operation};
use crate::credentials::HaloPsaCredentials;
use crate::params::{ItemParameters, OperationParams, WriteParams};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Form field carrying the uploaded file.
pub const MULTIPART_FILE_FIELD: &str = "file";

/// File name used when the binary data does not carry one.
pub const DEFAULT_FILE_NAME: &str = "file";

/// Read a path parameter as a plain string.
///
/// Strings are used as-is and numbers in decimal; anything else (including
/// an empty string) cannot fill a placeholder.
fn path_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Value for `placeholder`: a parameter of the same name, else the
/// operation's field bound to it.
fn placeholder_value(
    operation: &Operation,
    placeholder: &str,
    values: &Map<String, Value>,
) -> Result<String, NodeError> {
    let candidates = std::iter::once(placeholder)
        .chain(operation.path_field(placeholder).map(|f| f.name));

    for name in candidates {
        if let Some(value) = values.get(name) {
            return path_text(value).ok_or_else(|| {
                NodeError::Configuration(format!(
                    "path parameter '{name}' for {{{placeholder}}} must be a non-empty string or number"
                ))
            });
        }
    }

    let expected = operation
        .path_field(placeholder)
        .map(|f| f.name)
        .unwrap_or(placeholder);
    Err(NodeError::Configuration(format!(
        "missing path parameter '{expected}' for {{{placeholder}}} in '{}'",
        operation.endpoint
    )))
}

/// Substitute every `{placeholder}` in the operation's endpoint.
///
/// The template is walked once, so substituted values are never scanned
/// for further placeholders.
///
/// # Errors
/// [`NodeError::Configuration`] if a placeholder cannot be resolved; a
/// literal `{name}` never reaches the URL.
pub fn render_endpoint(
    operation: &Operation,
    values: &Map<String, Value>,
) -> Result<String, NodeError> {
    let mut endpoint = String::with_capacity(operation.endpoint.len());
    let mut rest = operation.endpoint;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else { break };
        endpoint.push_str(&rest[..start]);
        let placeholder = &rest[start + 1..start + len];
        endpoint.push_str(&placeholder_value(operation, placeholder, values)?);
        rest = &rest[start + len + 1..];
    }
    endpoint.push_str(rest);
    Ok(endpoint)
}

fn json_body(request: &mut HttpRequest, write: &WriteParams) -> Result<(), NodeError> {
    request.body = RequestBody::Json(write.compose_body()?);
    Ok(())
}

/// Build the request for one item.
///
/// # Errors
/// - [`NodeError::Configuration`] for unresolved path parameters.
/// - [`NodeError::Input`] for malformed JSON body or query text.
pub fn build_request(
    entry: Entry,
    params: ItemParameters,
    credentials: &HaloPsaCredentials,
    item: &InputItem,
) -> Result<HttpRequest, NodeError> {
    let operation = entry.operation;
    let endpoint = render_endpoint(operation, &params.values)?;

    let mut request = HttpRequest::new(
        operation.method,
        format!("{}{}", credentials.base_url(), endpoint),
    );

    let mut multipart = false;
    match params.into_operation_params(entry.shape()) {
        OperationParams::Filter(filter) => request.query = filter.compose_query()?,
        OperationParams::Write(write) => json_body(&mut request, &write)?,
        OperationParams::Attachment(upload) => {
            match item.binary_data(&upload.binary_property_name) {
                Some(binary) => {
                    multipart = true;
                    request.body = RequestBody::Multipart(FilePart {
                        field: MULTIPART_FILE_FIELD.to_owned(),
                        data: binary.data.clone(),
                        file_name: binary
                            .file_name
                            .clone()
                            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_owned()),
                        mime_type: binary.mime_type.clone(),
                    });
                }
                None => json_body(&mut request, &upload.write)?,
            }
        }
        OperationParams::Bare => {}
    }

    if !multipart {
        request
            .headers
            .push(("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned()));
    }
    request.headers.extend(credentials.identity_headers());

    Ok(request)
}
