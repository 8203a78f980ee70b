use crate::business::Business;
use crate::config::{create_http_client, Config};
use crate::document::{Document, DocumentType};
use crate::download::DownloadInfo;
use crate::error::{EversignError, Result};
use crate::file::UploadedFile;
use crate::request::ApiRequest;
use crate::signer::Signer;
use crate::template::Template;
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::path::Path;

const BUSINESS_ENDPOINT: &str = "business";
const DOCUMENT_ENDPOINT: &str = "document";
const DOWNLOAD_RAW_ENDPOINT: &str = "download_raw_document";
const DOWNLOAD_FINAL_ENDPOINT: &str = "download_final_document";
const FILE_ENDPOINT: &str = "file";
const REMINDER_ENDPOINT: &str = "send_reminder";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReminderRequest<'a> {
    document_hash: &'a str,
    signer_id: i64,
}

/// Entry point to the API: one method per operation.
///
/// Document and template calls are scoped to the selected business, which
/// is passed as `business_id` on every such request.
#[derive(Clone)]
pub struct Client {
    access_key: String,
    business_id: Option<i64>,
    config: Config,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client with the default configuration and no business selected
    pub fn new(access_key: impl Into<String>) -> Result<Self> {
        Client::with_config(access_key, Config::default())
    }

    /// Create a client bound to a business
    pub fn with_business(access_key: impl Into<String>, business_id: i64) -> Result<Self> {
        let mut client = Client::new(access_key)?;
        client.business_id = Some(business_id);
        Ok(client)
    }

    /// Create a client with a custom configuration
    pub fn with_config(access_key: impl Into<String>, config: Config) -> Result<Self> {
        Ok(Client {
            access_key: access_key.into(),
            business_id: None,
            http: create_http_client(&config)?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selected_business(&self) -> Option<i64> {
        self.business_id
    }

    /// Scope subsequent calls to `business`
    pub fn set_selected_business(&mut self, business: &Business) -> Result<()> {
        let id = business
            .business_id
            .ok_or_else(|| EversignError::InvalidArgument("business has no business_id".to_string()))?;
        self.business_id = Some(id);
        Ok(())
    }

    pub fn set_selected_business_by_id(&mut self, business_id: i64) {
        self.business_id = Some(business_id);
    }

    /// Start a request against `endpoint` sharing this client's connection pool
    pub fn request(&self, method: Method, endpoint: &str) -> ApiRequest {
        ApiRequest::new(method, self.access_key.clone(), endpoint)
            .with_client(self.http.clone(), self.config.clone())
    }

    fn scoped(&self, method: Method, endpoint: &str) -> ApiRequest {
        let request = self.request(method, endpoint);
        match self.business_id {
            Some(id) => request.param("business_id", id),
            None => request,
        }
    }

    /// List the businesses the access key can see
    pub fn get_businesses(&self) -> Result<Vec<Business>> {
        Ok(self
            .request(Method::GET, BUSINESS_ENDPOINT)
            .start_request::<Business>()?
            .into_vec())
    }

    /// List documents or templates of the selected business
    pub fn get_documents(&self, document_type: DocumentType) -> Result<Vec<Document>> {
        Ok(self
            .scoped(Method::GET, DOCUMENT_ENDPOINT)
            .param("type", document_type)
            .start_request::<Document>()?
            .into_vec())
    }

    pub fn get_all_documents(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::All)
    }

    pub fn get_completed_documents(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::Completed)
    }

    pub fn get_draft_documents(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::Draft)
    }

    pub fn get_cancelled_documents(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::Cancelled)
    }

    pub fn get_action_required_documents(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::ActionRequired)
    }

    pub fn get_waiting_for_others_documents(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::WaitingForOthers)
    }

    pub fn get_templates(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::Templates)
    }

    pub fn get_archived_templates(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::ArchivedTemplates)
    }

    pub fn get_draft_templates(&self) -> Result<Vec<Document>> {
        self.get_documents(DocumentType::DraftTemplates)
    }

    pub fn get_document_by_hash(&self, document_hash: &str) -> Result<Document> {
        require("document_hash", document_hash)?;
        self.scoped(Method::GET, DOCUMENT_ENDPOINT)
            .param("document_hash", document_hash)
            .start_request::<Document>()?
            .into_single()
    }

    /// Create a document; the returned copy carries its `document_hash`
    pub fn create_document(&self, document: &Document) -> Result<Document> {
        self.scoped(Method::POST, DOCUMENT_ENDPOINT)
            .payload(document)?
            .start_request::<Document>()?
            .into_single()
    }

    pub fn create_document_from_template(&self, template: &Template) -> Result<Document> {
        if template.template_id.as_deref().map_or(true, str::is_empty) {
            return Err(EversignError::InvalidArgument("template_id is required".to_string()));
        }
        self.scoped(Method::POST, DOCUMENT_ENDPOINT)
            .payload(template)?
            .start_request::<Document>()?
            .into_single()
    }

    /// Delete a draft or cancelled document
    pub fn delete_document(&self, document: &Document) -> Result<()> {
        let hash = document_hash(document)?;
        self.scoped(Method::DELETE, DOCUMENT_ENDPOINT)
            .param("document_hash", hash)
            .start_request_value()?;
        Ok(())
    }

    /// Cancel a document that is out for signature
    pub fn cancel_document(&self, document: &Document) -> Result<()> {
        let hash = document_hash(document)?;
        self.scoped(Method::DELETE, DOCUMENT_ENDPOINT)
            .param("document_hash", hash)
            .param("cancel", 1)
            .start_request_value()?;
        Ok(())
    }

    /// Download the document as uploaded, without signatures
    pub fn download_raw_document_to_path(&self, document: &Document, path: impl AsRef<Path>) -> Result<DownloadInfo> {
        let hash = document_hash(document)?;
        self.scoped(Method::GET, DOWNLOAD_RAW_ENDPOINT)
            .param("document_hash", hash)
            .sink(path.as_ref())
            .start_download()
    }

    /// Download the signed document, optionally with the audit trail appended
    pub fn download_final_document_to_path(
        &self,
        document: &Document,
        path: impl AsRef<Path>,
        audit_trail: bool,
    ) -> Result<DownloadInfo> {
        let hash = document_hash(document)?;
        self.scoped(Method::GET, DOWNLOAD_FINAL_ENDPOINT)
            .param("document_hash", hash)
            .param("audit_trail", u8::from(audit_trail))
            .sink(path.as_ref())
            .start_download()
    }

    /// Upload a local file; reference the result from a document with `File::from(&uploaded)`
    pub fn upload_file(&self, path: impl AsRef<Path>) -> Result<UploadedFile> {
        self.scoped(Method::POST, FILE_ENDPOINT)
            .file(path.as_ref())
            .start_multipart_upload::<UploadedFile>()?
            .into_single()
    }

    pub fn send_reminder_for_document(&self, document: &Document, signer: &Signer) -> Result<()> {
        let hash = document_hash(document)?;
        let signer_id = signer
            .id
            .ok_or_else(|| EversignError::InvalidArgument("signer has no id".to_string()))?;
        self.scoped(Method::POST, REMINDER_ENDPOINT)
            .payload(&ReminderRequest {
                document_hash: hash,
                signer_id,
            })?
            .start_request_value()?;
        Ok(())
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EversignError::InvalidArgument(format!("{} is required", name)));
    }
    Ok(())
}

fn document_hash(document: &Document) -> Result<&str> {
    let hash = document.document_hash.as_deref().unwrap_or_default();
    require("document_hash", hash)?;
    Ok(hash)
}

// Keep the access key out of debug output
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("access_key", &"<redacted>")
            .field("business_id", &self.business_id)
            .field("config", &self.config)
            .finish()
    }
}
