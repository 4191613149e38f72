use std::collections::HashMap;

/// Form fields submitted with one registration attempt. Transient input,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct RegistrationAttempt {
    fields: HashMap<String, String>,
}

impl RegistrationAttempt {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn from_email(email: &str) -> Self {
        Self {
            fields: HashMap::from([("email".to_string(), email.to_string())]),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The `email` field, when present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.field("email").filter(|e| !e.is_empty())
    }
}
