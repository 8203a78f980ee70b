use serde::{Deserialize, Serialize};

/// A form field placed on a document page.
///
/// For documents created from a template only `identifier` and `value`
/// matter: they fill the template's named field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    /// signature, initials, date_signed, note, text, checkbox, radio, dropdown, attachment
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    /// Id of the signer who fills the field
    #[serde(with = "crate::lenient::string", skip_serializing_if = "Option::is_none")]
    pub signer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_font: Option<String>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub text_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(with = "crate::lenient::string", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(with = "crate::lenient::string", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Field {
    /// A positioned field of the given type
    pub fn new(field_type: impl Into<String>) -> Self {
        Field {
            field_type: Some(field_type.into()),
            ..Field::default()
        }
    }

    /// A template field filled by identifier
    pub fn template_value(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            identifier: Some(identifier.into()),
            value: Some(value.into()),
            ..Field::default()
        }
    }

    /// Place the field on `page` at (`x`, `y`) with the given size
    pub fn at(mut self, page: i64, x: i64, y: i64, width: i64, height: i64) -> Self {
        self.page = Some(page);
        self.x = Some(x);
        self.y = Some(y);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_signer(mut self, signer_id: impl ToString) -> Self {
        self.signer = Some(signer_id.to_string());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }
}
