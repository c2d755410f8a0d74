use serde::Serialize;

use super::bundle::AppMetadata;

/// Ordered, duplicate-free set of non-empty substrings used to match
/// leftover files. Insertion order is kept so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    /// Add a term; blank values and exact (case-sensitive) duplicates are ignored
    pub fn insert(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.0.iter().any(|t| t == term) {
            return false;
        }
        self.0.push(term.to_string());
        true
    }

    /// Check whether a file name contains any term
    pub fn matches(&self, file_name: &str) -> bool {
        self.0.iter().any(|t| file_name.contains(t.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Derive search terms from app metadata.
///
/// Order: bundle identifier, name, executable (when it differs from the
/// name), then the last component of the reverse-DNS identifier.
pub fn derive_terms(meta: &AppMetadata) -> SearchTerms {
    let mut terms = SearchTerms::default();

    terms.insert(&meta.bundle_id);

    if let Some(ref name) = meta.name {
        terms.insert(name);
    }

    if let Some(ref exe) = meta.executable {
        if meta.name.as_deref() != Some(exe.as_str()) {
            terms.insert(exe);
        }
    }

    // e.g. "com.vendor.product" -> "product"
    if let Some(short) = meta.bundle_id.rsplit('.').next() {
        terms.insert(short);
    }

    terms
}
