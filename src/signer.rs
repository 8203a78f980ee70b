use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A person asked to sign a document.
///
/// When creating a document from a template, `role` picks the template role
/// the signer fills. The status fields (`signed`, `viewed`, ...) are only
/// ever set by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signer {
    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(with = "crate::lenient::string", skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub deliver_email: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,

    #[serde(with = "crate::lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub signed_timestamp: Option<Timestamp>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub declined: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub sent: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub viewed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_signing_url: Option<String>,
}

impl Signer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Signer {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Signer::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Receives a copy of the document without signing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Recipient {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Recipient {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Recipient::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
