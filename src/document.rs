use crate::field::Field;
use crate::file::File;
use crate::signer::{Recipient, Signer};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document list filters accepted by the `document` endpoint's `type` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    All,
    Completed,
    Draft,
    Cancelled,
    ActionRequired,
    WaitingForOthers,
    Templates,
    ArchivedTemplates,
    DraftTemplates,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::All => "all",
            DocumentType::Completed => "completed",
            DocumentType::Draft => "draft",
            DocumentType::Cancelled => "cancelled",
            DocumentType::ActionRequired => "my_action_required",
            DocumentType::WaitingForOthers => "waiting_for_others",
            DocumentType::Templates => "templates",
            DocumentType::ArchivedTemplates => "templates_archived",
            DocumentType::DraftTemplates => "template_draft",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a document's audit log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogEntry {
    pub event: Option<String>,
    #[serde(with = "crate::lenient::int")]
    pub signer: Option<i64>,
    #[serde(with = "crate::lenient::timestamp")]
    pub timestamp: Option<Timestamp>,
}

/// A document: files to sign, who signs them, and where their fields go.
///
/// Build one locally and pass it to `Client::create_document`, or read one
/// back from the API. `fields` holds one list of fields per entry in `files`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_requester_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_requester_email: Option<String>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_trashed: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_cancelled: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub in_person: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub embedded_signing_enabled: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub flexible_signing: Option<bool>,

    /// Permission level; the API has sent both numbers and strings here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub use_signer_order: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub reminders: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub require_all_signers: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_decline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    #[serde(with = "crate::lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(with = "crate::lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub expires: Option<Timestamp>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub use_hidden_tags: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signers: Vec<Signer>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<Recipient>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Vec<Field>>,

    /// Caller-defined key/value pairs, returned untouched
    #[serde(
        deserialize_with = "crate::lenient::string_map::deserialize",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub meta: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub log: Vec<LogEntry>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Document {
            title: Some(title.into()),
            ..Document::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn append_file(&mut self, file: File) -> &mut Self {
        self.files.push(file);
        self
    }

    pub fn append_signer(&mut self, signer: Signer) -> &mut Self {
        self.signers.push(signer);
        self
    }

    pub fn append_recipient(&mut self, recipient: Recipient) -> &mut Self {
        self.recipients.push(recipient);
        self
    }

    /// Add a field to the file at `file_index`, growing the per-file lists as needed
    pub fn append_field(&mut self, file_index: usize, field: Field) -> &mut Self {
        if self.fields.len() <= file_index {
            self.fields.resize_with(file_index + 1, Vec::new);
        }
        self.fields[file_index].push(field);
        self
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Find a signer by id
    pub fn signer(&self, id: i64) -> Option<&Signer> {
        self.signers.iter().find(|s| s.id == Some(id))
    }
}
