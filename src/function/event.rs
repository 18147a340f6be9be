use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Incoming cloud-function HTTP event.
///
/// Field names follow the provider wire format; everything is optional
/// so a sparse event still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    pub path: String,
    pub raw_path: Option<String>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
    pub request_id: Option<String>,
}

/// Outgoing cloud-function HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON-encoded response body.
    pub body: String,
}
