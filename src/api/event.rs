use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The part of an API Gateway proxy event the handler reads. Everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl InvocationEvent {
    #[must_use]
    pub fn with_query(params: &[(&str, &str)]) -> Self {
        Self {
            query_string_parameters: Some(
                params
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            ),
        }
    }
}
