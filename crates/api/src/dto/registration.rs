use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone)]
pub struct RegistrationCheckRequest {
    /// Message accumulated by validators that already ran upstream.
    #[serde(default)]
    pub message: String,
    /// Submitted form fields; the domain guard reads `email`.
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegistrationCheckResponse {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
