use serde::{Deserialize, Serialize};

use crate::messages;

/// Ordered list of approved registration email domains.
///
/// Replaced wholesale on every successful admin submission. Duplicates
/// submitted by the administrator are preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Whitelist {
    domains: Vec<String>,
}

impl Whitelist {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    /// Splits raw admin input on runs of whitespace, preserving token
    /// order. Blank lines and surrounding whitespace collapse, so no
    /// empty candidates are produced.
    pub fn parse(raw: &str) -> Self {
        Self {
            domains: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Exact, case-sensitive membership test. `mail.example.com` does
    /// not match an entry `example.com`.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    /// Newline-joined form used to fill the admin textarea.
    pub fn as_text(&self) -> String {
        self.domains.join("\n")
    }

    /// Checks every entry in one pass and returns one error per
    /// offending entry, in submission order.
    pub fn validate(&self) -> Vec<String> {
        self.domains
            .iter()
            .filter_map(|d| Self::validate_domain(d).err())
            .collect()
    }

    /// Domain grammar: one or more dot-separated labels; every label but
    /// the last starts with an ASCII alphanumeric and continues with
    /// alphanumerics or hyphens; the last label is 1-63 alphanumerics.
    /// Case-insensitive.
    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if is_valid_domain(domain) {
            Ok(())
        } else {
            Err(format!("{domain}{}", messages::INVALID_DOMAIN_SUFFIX))
        }
    }
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let Some((last, heads)) = labels.split_last() else {
        return false;
    };
    for label in heads {
        let mut chars = label.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }
    !last.is_empty() && last.len() <= 63 && last.chars().all(|c| c.is_ascii_alphanumeric())
}
