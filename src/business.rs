use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A business (account workspace). Most document calls are scoped to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Business {
    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub business_id: Option<i64>,

    #[serde(with = "crate::lenient::int", skip_serializing_if = "Option::is_none")]
    pub business_status: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    #[serde(with = "crate::lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub creation_time_stamp: Option<Timestamp>,

    #[serde(with = "crate::lenient::flag", skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}
