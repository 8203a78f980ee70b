use crate::field::Field;
use crate::signer::{Recipient, Signer};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Request to create a document from an existing template.
///
/// Signers are matched to the template's roles through `Signer::role`;
/// fields fill the template's named fields through `identifier` and `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_requester_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_requester_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_decline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    #[serde(with = "crate::lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub expires: Option<Timestamp>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub embedded_signing_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signers: Vec<Signer>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<Recipient>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Template {
    pub fn new(template_id: impl Into<String>) -> Self {
        Template {
            template_id: Some(template_id.into()),
            ..Template::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
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

    pub fn append_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }
}
