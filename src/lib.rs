//! # eversign - client for the eversign e-signature REST API
//!
//! A blocking Rust client for creating, listing, downloading and managing
//! documents and templates on eversign.
//!
//! ## Features
//!
//! - One [`Client`] method per API operation, scoped to a selected business
//! - Plain data types for documents, templates, signers, recipients, fields and files
//! - Automatic key casing: payloads go out in snake_case, responses are read through camelCase
//! - Three request modes on [`ApiRequest`]: JSON, multipart upload and streamed download
//! - API failures (`"success": false`) surfaced as [`EversignError::Api`]
//!
//! ## Basic Usage
//!
//! ```no_run
//! use eversign::{Client, Field, Signer, Template};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::with_business("my-access-key", 1234)?;
//!
//!     let mut template = Template::new("template-id")
//!         .with_title("Form Test")
//!         .with_message("Test Message");
//!     template
//!         .append_signer(Signer::new("John Doe", "john@example.com").with_role("Client"))
//!         .append_field(Field::template_value("company_name", "Acme"));
//!
//!     let document = client.create_document_from_template(&template)?;
//!     println!("created {:?}", document.document_hash);
//!     Ok(())
//! }
//! ```
//!
//! ## Downloads and uploads
//!
//! ```no_run
//! use eversign::{Client, Document, File, Signer};
//!
//! let client = Client::with_business("my-access-key", 1234)?;
//!
//! let uploaded = client.upload_file("contract.pdf")?;
//! let mut document = Document::new("Contract");
//! document
//!     .append_file(File::from(&uploaded))
//!     .append_signer(Signer::new("Jane Doe", "jane@example.com").with_id(1));
//! let created = client.create_document(&document)?;
//!
//! client.download_final_document_to_path(&created, "out/contract-signed.pdf", true)?;
//! # Ok::<(), eversign::EversignError>(())
//! ```
//!
//! ## Logging
//!
//! Every request is logged through `tracing` at debug level (info level with
//! [`Config::with_debug`]); failures are logged at warn level. The access key
//! is never logged.

pub mod business;
pub mod casing;
pub mod client;
pub mod config;
pub mod document;
pub mod download;
pub mod error;
pub mod field;
pub mod file;
pub mod lenient;
pub mod request;
pub mod response;
pub mod signer;
pub mod template;
pub mod time;
pub mod upload;

// Re-export main types for convenience
pub use business::Business;
pub use client::Client;
pub use config::Config;
pub use document::{Document, DocumentType, LogEntry};
pub use download::DownloadInfo;
pub use error::{EversignError, Result};
pub use field::Field;
pub use file::{File, UploadedFile};
pub use request::ApiRequest;
pub use response::{ErrorPayload, Payload};
pub use signer::{Recipient, Signer};
pub use template::Template;
pub use time::Timestamp;

// Re-export for building requests by hand
pub use reqwest::Method;
