//! Ordered header name/value pairs fed to the engine.

use std::collections::HashMap;

use axum::http::HeaderMap;

/// Header fields in transport iteration order, one entry per name.
///
/// Repeated values for one name are joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields(Vec<(String, String)>);

impl HeaderFields {
    /// Collect the fields of an `http` header map.
    ///
    /// Values that are not valid UTF-8 are converted lossily.
    pub fn from_header_map(headers: &HeaderMap) -> Self {
        let fields = headers
            .keys()
            .map(|name| {
                let value = headers
                    .get_all(name)
                    .iter()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .collect::<Vec<_>>()
                    .join(", ");
                (name.as_str().to_string(), value)
            })
            .collect();
        Self(fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lower-case name → value lookup. Later duplicates win.
    pub fn normalized(&self) -> HashMap<String, &str> {
        self.0
            .iter()
            .map(|(n, v)| (n.to_lowercase(), v.as_str()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
