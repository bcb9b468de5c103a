//! In-memory mapping from original asset references to hashed references.
//!
//! The manifest is built fresh on every run and never persisted by the
//! rewrite pipeline; it serializes to a flat JSON object for reporting.

use std::collections::BTreeMap;

use serde::Serialize;

/// One original-to-hashed reference pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Text searched for in target files.
    pub original: String,
    /// Replacement text.
    pub hashed: String,
}

impl ManifestEntry {
    /// Creates an entry from its two halves.
    pub fn new(original: impl Into<String>, hashed: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            hashed: hashed.into(),
        }
    }
}

/// The set of reference rewrites produced by one run.
///
/// Keys are unique; inserting an existing key replaces its value. The
/// manifest itself carries no processing order, see
/// [`resolve_order`](crate::resolve_order) for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `original -> hashed`, returning the value it replaced, if any.
    pub fn insert(&mut self, original: impl Into<String>, hashed: impl Into<String>) -> Option<String> {
        self.entries.insert(original.into(), hashed.into())
    }

    /// Looks up the hashed reference for `original`.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no asset was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(original, hashed)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut m = Manifest::new();
        assert!(m.is_empty());
        assert!(m.insert("app.js", "app.2cf24db.js").is_none());
        assert_eq!(m.get("app.js"), Some("app.2cf24db.js"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn duplicate_key_last_wins() {
        let mut m = Manifest::new();
        m.insert("css/site.css", "css/site.aaaa.css");
        let previous = m.insert("css/site.css", "css/site.bbbb.css");
        assert_eq!(previous.as_deref(), Some("css/site.aaaa.css"));
        assert_eq!(m.get("css/site.css"), Some("css/site.bbbb.css"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn identity_is_order_independent() {
        let mut a = Manifest::new();
        a.insert("a.js", "a.1.js");
        a.insert("b.js", "b.2.js");
        let mut b = Manifest::new();
        b.insert("b.js", "b.2.js");
        b.insert("a.js", "a.1.js");
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut m = Manifest::new();
        m.insert("/app.js", "https://cdn.example.com/app.2cf24db.js");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"/app.js":"https://cdn.example.com/app.2cf24db.js"}"#);
    }
}
