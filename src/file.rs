use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// A file attached to a document.
///
/// Exactly one content source should be set: an uploaded `file_id`, a
/// public `file_url`, or inline `file_base64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_base64: Option<String>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
}

impl File {
    /// Reference a file previously sent with `Client::upload_file`
    pub fn from_file_id(name: impl Into<String>, file_id: impl Into<String>) -> Self {
        File {
            name: Some(name.into()),
            file_id: Some(file_id.into()),
            ..File::default()
        }
    }

    /// Let the API fetch the file from a URL
    pub fn from_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        File {
            name: Some(name.into()),
            file_url: Some(url.into()),
            ..File::default()
        }
    }

    /// Send the content inline, base64-encoded
    pub fn from_bytes(name: impl Into<String>, content: &[u8]) -> Self {
        File {
            name: Some(name.into()),
            file_base64: Some(STANDARD.encode(content)),
            ..File::default()
        }
    }

    /// Decode inline content, if this file carries any
    pub fn decoded_content(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.file_base64.as_deref().map(|encoded| STANDARD.decode(encoded))
    }
}

impl From<&UploadedFile> for File {
    fn from(upload: &UploadedFile) -> Self {
        File {
            name: upload.file_name.clone(),
            file_id: upload.file_id.clone(),
            ..File::default()
        }
    }
}

/// Response of a multipart upload to the `file` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedFile {
    pub file_id: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    #[serde(with = "crate::lenient::int")]
    pub file_size: Option<i64>,
}
