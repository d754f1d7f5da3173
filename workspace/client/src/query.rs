use std::fmt::Display;

/// Ordered query-string parameters.
///
/// Absent and empty values are dropped rather than sent as `key=`, and
/// setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` when `value` is present and non-empty, removes it otherwise.
    pub fn set<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        let value = value.map(|v| v.to_string()).filter(|v| !v.is_empty());
        self.pairs.retain(|(k, _)| k != key);
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    pub fn with<V: Display>(self, key: &str, value: V) -> Self {
        self.set(key, Some(value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Joins base, prefix and path, then appends the query string if any.
///
/// An empty base yields a same-origin relative URL such as `/api/kpis`.
pub fn build_url(base: &str, prefix: &str, path: &str, params: &QueryParams) -> String {
    let mut url = format!(
        "{}{}{}",
        base.trim_end_matches('/'),
        normalize_segment(prefix),
        normalize_segment(path)
    );
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.to_query_string());
    }
    url
}

fn normalize_segment(segment: &str) -> String {
    let trimmed = segment.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
