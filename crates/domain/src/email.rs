use crate::whitelist::Whitelist;

const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// An email address split at its first `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

impl EmailAddress {
    /// Parses `local@domain`. Returns `None` for anything that does not
    /// look like a deliverable address; callers guarding only on the
    /// domain treat that as "no opinion".
    pub fn parse(raw: &str) -> Option<Self> {
        let (local, domain) = raw.split_once('@')?;
        if local.is_empty() || !local.chars().all(is_local_part_char) {
            return None;
        }
        if Whitelist::validate_domain(domain).is_err() {
            return None;
        }
        Some(Self {
            local: local.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    /// The substring after the first `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c)
}
