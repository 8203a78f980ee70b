use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::casing::camel_case_keys;
use crate::error::{EversignError, Result};

/// The `error` object of a failure envelope:
/// `{"success": false, "error": {"code": 101, "type": "...", "info": "..."}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, with = "crate::lenient::int")]
    pub code: Option<i64>,

    #[serde(rename = "type", default, with = "crate::lenient::string")]
    pub kind: Option<String>,

    #[serde(default, with = "crate::lenient::string")]
    pub info: Option<String>,
}

impl ErrorPayload {
    /// Read each member on its own; a member of the wrong type is dropped
    /// without affecting the others.
    pub fn from_value(value: &Value) -> Self {
        let member = |name: &str| value.get(name).cloned().unwrap_or(Value::Null);
        ErrorPayload {
            code: crate::lenient::int::deserialize(member("code")).ok().flatten(),
            kind: crate::lenient::string::deserialize(member("type")).ok().flatten(),
            info: crate::lenient::string::deserialize(member("info")).ok().flatten(),
        }
    }
}

/// A decoded response body: one object, or an array of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> Payload<T> {
    /// Flatten into a vector; a single object becomes a one-element vector
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Payload::Single(item) => vec![item],
            Payload::List(items) => items,
        }
    }

    /// Take the single object; a list is accepted only if it has exactly one element
    pub fn into_single(self) -> Result<T> {
        match self {
            Payload::Single(item) => Ok(item),
            Payload::List(mut items) if items.len() == 1 => Ok(items.remove(0)),
            Payload::List(items) => Err(EversignError::Json(<serde_json::Error as serde::de::Error>::custom(
                format!("expected a single object, got an array of {}", items.len()),
            ))),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Payload::List(_))
    }
}

/// Return the API error carried by a failure envelope, if `body` is one.
///
/// When the envelope has no `error` member the whole body is used as payload.
pub fn failure(body: &Value) -> Option<EversignError> {
    let envelope = body.as_object()?;
    if envelope.get("success") != Some(&Value::Bool(false)) {
        return None;
    }
    let payload = envelope.get("error").cloned().unwrap_or_else(|| body.clone());
    Some(EversignError::from_payload(payload))
}

/// Check a raw HTTP response body against the envelope contract.
///
/// A failure envelope wins over the status code. A 4xx/5xx without one is
/// an HTTP error. An empty body on success decodes to `null`.
pub fn check_body(status: u16, body: &[u8]) -> Result<Value> {
    let is_error_status = status >= 400;

    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) if is_error_status => {
                return Err(EversignError::http(status, String::from_utf8_lossy(body).to_string()))
            }
            Err(e) => return Err(EversignError::Json(e)),
        }
    };

    if let Some(err) = failure(&value) {
        return Err(err);
    }

    if is_error_status {
        return Err(EversignError::http(status, String::from_utf8_lossy(body).to_string()));
    }

    Ok(value)
}

/// Rename the body's keys to camelCase and decode it into the hinted type.
///
/// Arrays, including the empty one, become [`Payload::List`].
pub fn into_payload<T>(body: Value) -> Result<Payload<T>>
where
    T: DeserializeOwned,
{
    match camel_case_keys(body) {
        Value::Array(items) => {
            let decoded = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<T>, _>>()?;
            Ok(Payload::List(decoded))
        }
        other => Ok(Payload::Single(serde_json::from_value(other)?)),
    }
}
