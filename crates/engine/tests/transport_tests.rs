//! End-to-end runs of the Halo PSA node over `ReqwestTransport` against a
//! mock HTTP server.
//!
//! ## Invariants
//! - Identity headers reach the wire on every request
//! - JSON bodies are sent exactly as composed
//! - Uploads go out as multipart without a JSON content type
//! - Non-2xx answers surface as `"<status> - <body>"`

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use engine::{default_registry, EngineError, NodeDefinition, NodeExecutor, ReqwestTransport};
use halopsa::{HaloPsaCredentials, CREDENTIAL_TYPE, NODE_TYPE};
use nodes::{BinaryData, InputItem, ItemOutcome, NodeError};

fn executor(server: &MockServer) -> NodeExecutor {
    let credentials = HaloPsaCredentials::new(
        format!("{}/api/", server.uri()),
        "key",
        "client-abc",
        "s3cret",
    )
    .with_tenant("acme")
    .to_value()
    .expect("Failed to encode credentials");

    let transport = ReqwestTransport::new().expect("Failed to build transport");
    NodeExecutor::new(default_registry(), Arc::new(transport))
        .with_credentials(CREDENTIAL_TYPE, credentials)
}

fn definition(parameters: Value) -> NodeDefinition {
    NodeDefinition::new(
        "halo",
        NODE_TYPE,
        serde_json::from_value(parameters).expect("Invalid parameters"),
    )
}

#[tokio::test]
async fn test_get_ticket_sends_identity_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Tickets/7"))
        .and(query_param("includedetails", "true"))
        .and(header("X-Tenant", "acme"))
        .and(header("X-HaloPSA-ClientId", "client-abc"))
        .and(header("X-HaloPSA-ClientSecret", "s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "summary": "Printer" })))
        .expect(1)
        .mount(&server)
        .await;

    let def = definition(json!({
        "resource": "tickets",
        "operation": "getTicket",
        "ticketId": "7",
        "additionalFields": { "includedetails": true },
    }));
    let result = executor(&server)
        .run(&def, vec![InputItem::default()])
        .await
        .expect("run failed");

    assert_eq!(
        result.items[0].outcome,
        ItemOutcome::Result(json!({ "id": 7, "summary": "Printer" }))
    );
}

#[tokio::test]
async fn test_list_query_is_flattened() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Client"))
        .and(query_param("pagesize", "25"))
        .and(query_param("search", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "clients": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let def = definition(json!({
        "resource": "client",
        "operation": "getClients",
        "jsonParameters": true,
        "queryParameters": "{\"search\": \"acme\"}",
        "additionalFields": { "pagesize": 25 },
    }));
    let result = executor(&server)
        .run(&def, vec![InputItem::default()])
        .await
        .expect("run failed");

    assert_eq!(result.failed_items(), 0);
}

#[tokio::test]
async fn test_create_client_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Client"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "Acme" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 31, "name": "Acme" })))
        .expect(1)
        .mount(&server)
        .await;

    let def = definition(json!({
        "resource": "client",
        "operation": "createClient",
        "jsonRequestBody": "{\"name\":\"Acme\"}",
    }));
    let result = executor(&server)
        .run(&def, vec![InputItem::default()])
        .await
        .expect("run failed");

    assert_eq!(
        result.items[0].outcome,
        ItemOutcome::Result(json!({ "id": 31, "name": "Acme" }))
    );
}

#[tokio::test]
async fn test_attachment_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Attachment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 90 })))
        .expect(1)
        .mount(&server)
        .await;

    let item = InputItem::default().with_binary(
        "data",
        BinaryData::new(b"hello halo".to_vec(), "text/plain").with_file_name("notes.txt"),
    );
    let def = definition(json!({ "resource": "attachment", "operation": "createAttachment" }));
    executor(&server).run(&def, vec![item]).await.expect("run failed");

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"), "got {content_type}");

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"notes.txt\""));
    assert!(body.contains("hello halo"));
    assert!(request.headers.get("X-HaloPSA-ClientId").is_some());
}

#[tokio::test]
async fn test_delete_with_empty_response_yields_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/Asset/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let def = definition(json!({ "resource": "asset", "operation": "deleteAsset", "assetId": 5 }));
    let result = executor(&server)
        .run(&def, vec![InputItem::default()])
        .await
        .expect("run failed");

    assert_eq!(result.items[0].outcome, ItemOutcome::Result(Value::Null));
}

#[tokio::test]
async fn test_not_found_becomes_error_record_with_continue_on_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Tickets/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Ticket not found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Tickets/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 8 })))
        .mount(&server)
        .await;

    let def = definition(json!([
        { "resource": "tickets", "operation": "getTicket", "ticketId": "404" },
        { "resource": "tickets", "operation": "getTicket", "ticketId": "8" },
    ]))
    .continue_on_fail(true);
    let result = executor(&server)
        .run(&def, vec![InputItem::default(), InputItem::default()])
        .await
        .expect("run failed");

    assert_eq!(
        result.items[0].outcome,
        ItemOutcome::Error("404 - Ticket not found".into())
    );
    assert_eq!(result.items[1].outcome, ItemOutcome::Result(json!({ "id": 8 })));
}

#[tokio::test]
async fn test_server_error_aborts_without_continue_on_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Supplier"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let def = definition(json!({ "resource": "supplier", "operation": "getSuppliers" }));
    let err = executor(&server)
        .run(&def, vec![InputItem::default(), InputItem::default()])
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::NodeFailed { .. }));
    assert_eq!(err.node_error(), Some(&NodeError::External("500 - boom".into())));
}
