//! API Gateway proxy response builder.

use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    pub status_code: u16,
    pub is_base64_encoded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    pub body: String,
}

impl ResponseDescriptor {
    /// A 200 carrying `bytes` as standard, padded base64.
    #[must_use]
    pub fn ok_base64(bytes: &[u8], headers: Option<BTreeMap<String, String>>) -> Self {
        Self {
            status_code: 200,
            is_base64_encoded: true,
            headers,
            body: general_purpose::STANDARD.encode(bytes),
        }
    }
}
