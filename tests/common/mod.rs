//! In-process mock of the eversign API.
//!
//! Serves a handful of canned responses on a random local port and records
//! every request it sees, so tests can check both what the client sent and
//! how it decoded the reply.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const VALID_KEY: &str = "test-access-key";
pub const BUSINESS_ID: i64 = 1234;
pub const MISSING_HASH: &str = "missing";
/// Download endpoints answer this hash with a JSON success body instead of a PDF
pub const JSON_HASH: &str = "json-body";

/// One request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn query_keys(&self) -> Vec<&str> {
        self.query.iter().map(|(k, _)| k.as_str()).collect()
    }
}

type Shared = Arc<Mutex<Vec<Recorded>>>;

pub struct MockServer {
    pub base_url: String,
    requests: Shared,
}

impl MockServer {
    /// Start the mock on a background thread with its own runtime
    pub fn start() -> Self {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let requests: Shared = Arc::default();
        let app = Router::new()
            .route("/api/file", post(upload))
            .fallback(dispatch)
            .with_state(requests.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        MockServer {
            base_url: format!("http://{addr}/api/"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("mock saw no request")
    }
}

fn failure(code: i64, kind: &str, info: &str) -> Response {
    Json(json!({
        "success": false,
        "error": {"code": code, "type": kind, "info": info}
    }))
    .into_response()
}

fn parse_query(uri: &Uri) -> Vec<(String, String)> {
    url::form_urlencoded::parse(uri.query().unwrap_or("").as_bytes())
        .into_owned()
        .collect()
}

fn sample_document(hash: &str) -> Value {
    json!({
        "document_hash": hash,
        "requester_email": "owner@example.com",
        "title": "NDA",
        "is_draft": 0,
        "is_completed": 0,
        "created": 1536064712,
        "signers": [
            {"id": 1, "name": "Jane Doe", "email": "jane@example.com", "signed": 0, "status": "waiting_for_signature"}
        ],
        "fields": [[{"type": "signature", "signer": "1", "page": "1", "x": "100", "y": "200"}]],
        "meta": {"internal_ref": "r-1"}
    })
}

async fn dispatch(State(requests): State<Shared>, method: Method, uri: Uri, body: Bytes) -> Response {
    let query = parse_query(&uri);
    let body: Option<Value> = serde_json::from_slice(&body).ok();
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        body,
    };
    requests.lock().unwrap().push(recorded.clone());

    if recorded.path == "/api/broken" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    if recorded.param("access_key") != Some(VALID_KEY) {
        return failure(101, "invalid_access_key", "You have not supplied a valid Access Key.");
    }

    let hash = recorded.param("document_hash").unwrap_or_default().to_string();

    match (recorded.method.as_str(), recorded.path.as_str()) {
        ("GET", "/api/business") => Json(json!([
            {
                "business_id": BUSINESS_ID,
                "business_status": 1,
                "business_identifier": "acme",
                "business_name": "Acme Corp",
                "creation_time_stamp": 1536064712,
                "is_primary": 1
            },
            {
                "business_id": "99",
                "business_name": "Side Project",
                "is_primary": "0"
            }
        ]))
        .into_response(),

        ("GET", "/api/document") if hash == MISSING_HASH => {
            failure(404, "document_not_found", "No document exists with this hash.")
        }
        ("GET", "/api/document") if !hash.is_empty() => Json(sample_document(&hash)).into_response(),
        ("GET", "/api/document") => {
            let kind = recorded.param("type").unwrap_or("all").to_string();
            Json(json!([
                {"document_hash": format!("{kind}-1"), "title": format!("{kind} one")},
                {"document_hash": format!("{kind}-2"), "title": format!("{kind} two")}
            ]))
            .into_response()
        }

        ("POST", "/api/document") => {
            let Some(Value::Object(mut doc)) = recorded.body.clone() else {
                return failure(100, "invalid_body", "Body must be a JSON object.");
            };
            if !doc.contains_key("title") && !doc.contains_key("template_id") {
                return failure(110, "missing_title", "The document title is missing.");
            }
            let hash = if doc.contains_key("template_id") { "from-template" } else { "created-1" };
            doc.insert("document_hash".to_string(), json!(hash));
            doc.insert("is_draft".to_string(), json!(0));
            Json(Value::Object(doc)).into_response()
        }

        ("DELETE", "/api/document") => Json(json!({"success": true})).into_response(),

        ("POST", "/api/send_reminder") => Json(json!({"success": true})).into_response(),

        ("GET", "/api/download_raw_document" | "/api/download_final_document") if hash == MISSING_HASH => {
            failure(404, "document_not_found", "No document exists with this hash.")
        }
        ("GET", "/api/download_raw_document") if hash == JSON_HASH => {
            Json(json!({"success": true, "document_hash": hash})).into_response()
        }
        ("GET", "/api/download_raw_document") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/pdf")],
            format!("%PDF-raw {hash}"),
        )
            .into_response(),
        ("GET", "/api/download_final_document") => {
            let audit_trail = recorded.param("audit_trail").unwrap_or("none").to_string();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/pdf")],
                format!("%PDF-final {hash} audit_trail={audit_trail}"),
            )
                .into_response()
        }

        _ => (StatusCode::NOT_FOUND, "no such endpoint").into_response(),
    }
}

async fn upload(State(requests): State<Shared>, uri: Uri, mut multipart: Multipart) -> Response {
    let query = parse_query(&uri);

    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.unwrap_or_default();
        parts.push(json!({"name": name, "file_name": file_name, "size": data.len()}));
    }

    let recorded = Recorded {
        method: "POST".to_string(),
        path: uri.path().to_string(),
        query,
        body: Some(Value::Array(parts.clone())),
    };
    requests.lock().unwrap().push(recorded.clone());

    if recorded.param("access_key") != Some(VALID_KEY) {
        return failure(101, "invalid_access_key", "You have not supplied a valid Access Key.");
    }

    let Some(part) = parts.iter().find(|p| p["name"] == "upload") else {
        return failure(120, "missing_upload", "No file was uploaded.");
    };

    Json(json!({
        "file_id": "uploaded-1",
        "file_name": part["file_name"],
        "file_type": "application/pdf",
        "file_size": part["size"]
    }))
    .into_response()
}

/// Serve one download whose body stops short of its Content-Length.
///
/// Returns the API base URL. The server answers a single request with the
/// headers and the first bytes of a PDF, then closes the connection.
pub fn start_truncated_download() -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let _ = stream.write_all(
            b"HTTP/1.1 200 OK\r\nContent-Type: application/pdf\r\nContent-Length: 4096\r\n\r\n%PDF-1.4 partial",
        );
        let _ = stream.flush();
    });

    format!("http://{addr}/api/")
}
