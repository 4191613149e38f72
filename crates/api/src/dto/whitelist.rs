use mailgate_domain::{messages, Whitelist};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct WhitelistResponse {
    pub domains: Vec<String>,
    /// Newline-joined form, ready for the admin textarea.
    pub text: String,
}

impl WhitelistResponse {
    pub fn from_whitelist(whitelist: &Whitelist) -> Self {
        Self {
            domains: whitelist.domains().to_vec(),
            text: whitelist.as_text(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SaveWhitelistRequest {
    /// Raw textarea content: whitespace-separated domain tokens.
    pub whitelist: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct SaveWhitelistResponse {
    pub saved: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Raw input echoed back unchanged so the admin can correct it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<String>,
}

impl SaveWhitelistResponse {
    pub fn saved(whitelist: &Whitelist) -> Self {
        Self {
            saved: true,
            message: messages::WHITELIST_SAVED.to_string(),
            domains: Some(whitelist.domains().to_vec()),
            errors: Vec::new(),
            submitted: None,
        }
    }

    pub fn rejected(errors: Vec<String>, submitted: String) -> Self {
        Self {
            saved: false,
            message: messages::CORRECT_PROBLEMS.to_string(),
            domains: None,
            errors,
            submitted: Some(submitted),
        }
    }
}
