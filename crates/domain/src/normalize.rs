//! Turning pasted input (URLs, host:port, lists) into bare domain names.

use std::collections::HashSet;

/// Reduces one input token to a lowercase domain, or `None` when nothing
/// usable is left.
///
/// `https://Example.COM:8443/path?q#frag` becomes `example.com`.
pub fn normalize_domain(input: &str) -> Option<String> {
    let mut domain = input.trim();
    if domain.is_empty() {
        return None;
    }

    domain = strip_scheme(domain);
    let without_port = remove_first_port(domain);
    let mut domain = without_port.as_str();

    if let Some(end) = domain.find(['/', '?', '#']) {
        domain = &domain[..end];
    }
    domain = domain.strip_suffix('/').unwrap_or(domain);

    if domain.is_empty()
        || !domain
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
    {
        return None;
    }

    let domain = domain.trim_matches(['.', '-']).to_ascii_lowercase();
    (!domain.is_empty()).then_some(domain)
}

/// Normalizes every token, dropping invalid ones and later duplicates.
pub fn normalize_domains<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .filter_map(|raw| normalize_domain(raw.as_ref()))
        .filter(|domain| seen.insert(domain.clone()))
        .collect()
}

/// Splits free text on runs of whitespace and commas.
pub fn split_domain_input(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// What a submission of the given text would query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPreview {
    pub raw_count: usize,
    pub domains: Vec<String>,
}

impl DomainPreview {
    pub fn from_input(text: &str) -> Self {
        let raw = split_domain_input(text);
        Self {
            raw_count: raw.len(),
            domains: normalize_domains(&raw),
        }
    }

    /// Tokens dropped as invalid or duplicate.
    pub fn filtered_count(&self) -> usize {
        self.raw_count.saturating_sub(self.domains.len())
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

fn strip_scheme(s: &str) -> &str {
    match s.find("://") {
        Some(idx) if idx > 0 && s[..idx].bytes().all(|b| b.is_ascii_alphabetic()) => &s[idx + 3..],
        _ => s,
    }
}

/// Removes the leftmost `:` that is followed by at least one digit, with
/// those digits.
fn remove_first_port(s: &str) -> String {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b':' {
            continue;
        }
        let digits = bytes[i + 1..]
            .iter()
            .take_while(|d| d.is_ascii_digit())
            .count();
        if digits > 0 {
            return format!("{}{}", &s[..i], &s[i + 1 + digits..]);
        }
    }
    s.to_string()
}
