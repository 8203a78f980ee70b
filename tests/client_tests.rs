mod common;

use common::{MockServer, BUSINESS_ID, JSON_HASH, MISSING_HASH, VALID_KEY};
use eversign::{
    ApiRequest, Client, Config, Document, EversignError, Field, File, Method, Payload, Signer, Template,
};
use serde_json::{json, Value};

fn client(server: &MockServer) -> Client {
    Client::with_config(VALID_KEY, Config::new(server.base_url.clone()))
        .map(|mut c| {
            c.set_selected_business_by_id(BUSINESS_ID);
            c
        })
        .expect("failed to build client")
}

type ListFn = fn(&Client) -> eversign::Result<Vec<Document>>;

fn document_with_hash(hash: &str) -> Document {
    Document {
        document_hash: Some(hash.to_string()),
        ..Document::default()
    }
}

#[test]
fn test_get_businesses() {
    let server = MockServer::start();
    let businesses = client(&server).get_businesses().expect("get_businesses failed");

    assert_eq!(businesses.len(), 2);
    assert_eq!(businesses[0].business_id, Some(BUSINESS_ID));
    assert_eq!(businesses[0].business_name.as_deref(), Some("Acme Corp"));
    assert_eq!(businesses[0].is_primary, Some(true));
    assert_eq!(businesses[1].business_id, Some(99));
    assert_eq!(businesses[1].is_primary, Some(false));

    let req = server.last();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/business");
    assert_eq!(req.query_keys(), vec!["access_key"]);
}

#[test]
fn test_invalid_access_key_is_api_error() {
    let server = MockServer::start();
    let client = Client::with_config("wrong-key", Config::new(server.base_url.clone())).unwrap();

    let err = client.get_businesses().unwrap_err();
    assert_eq!(err.api_code(), Some(101));
    match err {
        EversignError::Api { kind, info, .. } => {
            assert_eq!(kind.as_deref(), Some("invalid_access_key"));
            assert!(info.contains("Access Key"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_document_lists_send_type_and_business() {
    let server = MockServer::start();
    let client = client(&server);

    let cases: [(ListFn, &str); 9] = [
        (Client::get_all_documents, "all"),
        (Client::get_completed_documents, "completed"),
        (Client::get_draft_documents, "draft"),
        (Client::get_cancelled_documents, "cancelled"),
        (Client::get_action_required_documents, "my_action_required"),
        (Client::get_waiting_for_others_documents, "waiting_for_others"),
        (Client::get_templates, "templates"),
        (Client::get_archived_templates, "templates_archived"),
        (Client::get_draft_templates, "template_draft"),
    ];

    for (call, kind) in cases {
        let documents = call(&client).unwrap_or_else(|e| panic!("listing {} failed: {}", kind, e));
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].document_hash.as_deref(), Some(format!("{kind}-1").as_str()));

        let req = server.last();
        assert_eq!(req.query_keys(), vec!["access_key", "business_id", "type"]);
        assert_eq!(req.param("business_id"), Some("1234"));
        assert_eq!(req.param("type"), Some(kind));
    }
}

#[test]
fn test_get_document_by_hash() {
    let server = MockServer::start();
    let document = client(&server).get_document_by_hash("abc123").unwrap();

    assert_eq!(document.document_hash.as_deref(), Some("abc123"));
    assert_eq!(document.is_draft, Some(false));
    assert_eq!(document.created.map(|t| t.unix()), Some(1536064712));
    assert_eq!(document.signers[0].name.as_deref(), Some("Jane Doe"));
    assert_eq!(document.fields[0][0].page, Some(1));
    assert_eq!(document.meta.get("internal_ref").map(String::as_str), Some("r-1"));
    assert_eq!(server.last().param("document_hash"), Some("abc123"));
}

#[test]
fn test_get_missing_document_is_api_error() {
    let server = MockServer::start();
    let err = client(&server).get_document_by_hash(MISSING_HASH).unwrap_err();
    assert_eq!(err.api_code(), Some(404));
}

#[test]
fn test_create_document_sends_snake_case_body() {
    let server = MockServer::start();

    let mut document = Document::new("NDA").with_message("Please sign");
    document.use_signer_order = Some(true);
    document
        .append_file(File::from_url("nda.pdf", "https://example.com/nda.pdf"))
        .append_signer(Signer::new("Jane Doe", "jane@example.com").with_id(1))
        .append_field(0, Field::new("signature").at(1, 100, 200, 120, 35).with_signer(1))
        .set_meta("someKey", "kept as is");

    let created = client(&server).create_document(&document).unwrap();
    assert_eq!(created.document_hash.as_deref(), Some("created-1"));
    assert_eq!(created.title.as_deref(), Some("NDA"));
    assert_eq!(created.use_signer_order, Some(true));
    assert_eq!(created.fields[0][0].width, Some(120));
    assert_eq!(created.meta.get("someKey").map(String::as_str), Some("kept as is"));

    let req = server.last();
    assert_eq!(req.method, "POST");
    let body = req.body.expect("request had no JSON body");
    assert_eq!(body["use_signer_order"], 1);
    assert_eq!(body["files"][0]["file_url"], "https://example.com/nda.pdf");
    assert_eq!(body["fields"][0][0]["signer"], "1");
    assert_eq!(body["meta"]["someKey"], "kept as is");
    assert!(body.get("useSignerOrder").is_none());
}

#[test]
fn test_create_document_failure_branch() {
    let server = MockServer::start();
    let err = client(&server).create_document(&Document::default()).unwrap_err();
    match err {
        EversignError::Api { code, kind, .. } => {
            assert_eq!(code, Some(110));
            assert_eq!(kind.as_deref(), Some("missing_title"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_create_document_from_template() {
    let server = MockServer::start();

    let mut template = Template::new("tpl-42").with_title("Form Test").with_message("Test Message ");
    template
        .append_signer(Signer::new("John Doe", "john@example.com").with_role("Client"))
        .append_field(Field::template_value("field_identifier", "value 1"));

    let document = client(&server).create_document_from_template(&template).unwrap();
    assert_eq!(document.document_hash.as_deref(), Some("from-template"));
    assert_eq!(document.template_id.as_deref(), Some("tpl-42"));

    let body = server.last().body.unwrap();
    assert_eq!(body["template_id"], "tpl-42");
    assert_eq!(body["signers"][0]["role"], "Client");
    assert_eq!(body["fields"][0], json!({"identifier": "field_identifier", "value": "value 1"}));
}

#[test]
fn test_delete_and_cancel() {
    let server = MockServer::start();
    let client = client(&server);
    let document = document_with_hash("abc123");

    client.delete_document(&document).unwrap();
    let req = server.last();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.param("document_hash"), Some("abc123"));
    assert_eq!(req.param("cancel"), None);

    client.cancel_document(&document).unwrap();
    let req = server.last();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.param("cancel"), Some("1"));
}

#[test]
fn test_send_reminder() {
    let server = MockServer::start();
    let signer = Signer::new("Jane Doe", "jane@example.com").with_id(1);

    client(&server)
        .send_reminder_for_document(&document_with_hash("abc123"), &signer)
        .unwrap();

    let req = server.last();
    assert_eq!(req.path, "/api/send_reminder");
    assert_eq!(req.body, Some(json!({"document_hash": "abc123", "signer_id": 1})));
}

#[test]
fn test_upload_file() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contract.pdf");
    std::fs::write(&path, b"%PDF-1.4 test content").unwrap();

    let uploaded = client(&server).upload_file(&path).unwrap();
    assert_eq!(uploaded.file_id.as_deref(), Some("uploaded-1"));
    assert_eq!(uploaded.file_name.as_deref(), Some("contract.pdf"));
    assert_eq!(uploaded.file_size, Some(21));
    assert_eq!(File::from(&uploaded), File::from_file_id("contract.pdf", "uploaded-1"));

    let req = server.last();
    assert_eq!(req.path, "/api/file");
    assert_eq!(req.param("business_id"), Some("1234"));
    let parts = req.body.unwrap();
    assert_eq!(parts[0]["name"], "upload");
}

#[test]
fn test_upload_missing_file_sends_nothing() {
    let server = MockServer::start();
    let err = client(&server).upload_file("/no/such/file.pdf").unwrap_err();
    assert!(matches!(err, EversignError::Io(_)));
    assert!(server.requests().is_empty());
}

#[test]
fn test_download_raw_document() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("raw/abc123.pdf");

    let info = client(&server)
        .download_raw_document_to_path(&document_with_hash("abc123"), &sink)
        .unwrap();

    let content = std::fs::read_to_string(&sink).unwrap();
    assert_eq!(content, "%PDF-raw abc123");
    assert_eq!(info.path, sink);
    assert_eq!(info.bytes, content.len() as u64);
    assert_eq!(info.content_type.as_deref(), Some("application/pdf"));
}

#[test]
fn test_download_final_document_with_audit_trail() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let client = client(&server);
    let document = document_with_hash("abc123");

    let with_trail = dir.path().join("with.pdf");
    client.download_final_document_to_path(&document, &with_trail, true).unwrap();
    assert_eq!(std::fs::read_to_string(&with_trail).unwrap(), "%PDF-final abc123 audit_trail=1");

    let without_trail = dir.path().join("without.pdf");
    client.download_final_document_to_path(&document, &without_trail, false).unwrap();
    assert_eq!(std::fs::read_to_string(&without_trail).unwrap(), "%PDF-final abc123 audit_trail=0");
}

#[test]
fn test_download_failure_leaves_no_file() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("missing.pdf");

    let err = client(&server)
        .download_raw_document_to_path(&document_with_hash(MISSING_HASH), &sink)
        .unwrap_err();
    assert_eq!(err.api_code(), Some(404));
    assert!(!sink.exists());
}

#[test]
fn test_download_json_success_body_is_written() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("ack.json");

    let info = client(&server)
        .download_raw_document_to_path(&document_with_hash(JSON_HASH), &sink)
        .unwrap();

    assert_eq!(info.content_type.as_deref(), Some("application/json"));
    let written: Value = serde_json::from_slice(&std::fs::read(&sink).unwrap()).unwrap();
    assert_eq!(written, json!({"success": true, "document_hash": JSON_HASH}));
    assert_eq!(info.bytes, std::fs::metadata(&sink).unwrap().len());
}

#[test]
fn test_truncated_download_removes_partial_file() {
    let base_url = common::start_truncated_download();
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("partial.pdf");

    let client = Client::with_config(VALID_KEY, Config::new(base_url)).unwrap();
    let err = client
        .download_raw_document_to_path(&document_with_hash("abc123"), &sink)
        .unwrap_err();

    assert!(matches!(err, EversignError::Transport(_)), "got {:?}", err);
    assert!(!sink.exists());
}

#[test]
fn test_download_without_sink_sends_nothing() {
    let server = MockServer::start();
    let err = client(&server)
        .request(Method::GET, "download_raw_document")
        .param("document_hash", "abc123")
        .start_download()
        .unwrap_err();

    assert!(matches!(err, EversignError::MissingSink));
    assert!(server.requests().is_empty());
}

#[test]
fn test_raw_request_value_is_camel_cased() {
    let server = MockServer::start();
    let value = ApiRequest::new(Method::GET, VALID_KEY, "business")
        .with_config(Config::new(server.base_url.clone()))
        .start_request_value()
        .unwrap();

    assert_eq!(value[0]["businessId"], BUSINESS_ID);
    assert_eq!(value[0]["creationTimeStamp"], 1536064712);
    assert!(value[0].get("business_id").is_none());
}

#[test]
fn test_hinted_request_single_vs_list() {
    let server = MockServer::start();
    let client = client(&server);

    let list = client
        .request(Method::GET, "document")
        .param("type", "draft")
        .start_request::<Value>()
        .unwrap();
    assert!(list.is_list());

    let single = client
        .request(Method::GET, "document")
        .param("document_hash", "abc123")
        .start_request::<Value>()
        .unwrap();
    match single {
        Payload::Single(doc) => assert_eq!(doc["documentHash"], "abc123"),
        Payload::List(_) => panic!("expected a single document"),
    }
}

#[test]
fn test_http_error_without_envelope() {
    let server = MockServer::start();
    let err = client(&server)
        .request(Method::GET, "broken")
        .start_request_value()
        .unwrap_err();

    match err {
        EversignError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[test]
fn test_transport_error() {
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::with_config(VALID_KEY, Config::new(format!("http://127.0.0.1:{port}/api/"))).unwrap();
    let err = client.get_businesses().unwrap_err();
    assert!(matches!(err, EversignError::Transport(_)), "got {:?}", err);
}
