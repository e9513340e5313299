use indexmap::IndexMap;

pub type Headers = IndexMap<&'static str, String>;

/// Ordered set of CORS response headers.
///
/// Inserting a name that is already present replaces its value in place, so a
/// set never holds the same header twice and iteration order stays stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    headers: Headers,
}

impl HeaderSet {
    pub(crate) fn new() -> Self {
        Self::with_estimate(6)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn insert<S: Into<String>>(&mut self, name: &'static str, value: S) {
        self.headers.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Folds every existing `Vary` value and `incoming` into one value, dropping
/// blanks and case-insensitive duplicates.
pub(crate) fn merge_vary(existing: &[&str], incoming: &str) -> String {
    let mut entries: Vec<&str> = existing
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let incoming = incoming.trim();
    if !incoming.is_empty() {
        entries.push(incoming);
    }

    let mut deduped: Vec<&str> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry == "*" {
            return "*".to_string();
        }
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    deduped.join(", ")
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
