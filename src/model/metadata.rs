//! Field metadata used to drive validation.

use std::collections::BTreeMap;

/// Describes a model field: its name and the attributes declared on it.
///
/// Attributes come from a tag such as `required|label=Background color`.
/// A bare attribute (`required`) is stored with the value `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData {
    name: String,
    attribs: BTreeMap<String, String>,
}

impl MetaData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribs: BTreeMap::new(),
        }
    }

    /// Parses a `|`-separated attribute tag for the field `name`.
    pub fn parse(name: impl Into<String>, tag: &str) -> Self {
        let mut meta = Self::new(name);

        for part in tag.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((key, value)) => meta.set_attrib(key.trim(), value.trim()),
                None => meta.set_attrib(part, "true"),
            }
        }

        meta
    }

    pub fn with_attrib(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attrib(key, value);
        self
    }

    pub fn set_attrib(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attribs.insert(key.into(), value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable field name: the `label` attribute, or the field name.
    pub fn label(&self) -> &str {
        self.attrib("label").unwrap_or(&self.name)
    }

    pub fn attrib(&self, key: &str) -> Option<&str> {
        self.attribs.get(key).map(String::as_str)
    }

    /// Returns true for a bare attribute or one set to `true`/`1`.
    pub fn bool_attrib(&self, key: &str) -> bool {
        self.attrib(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
    }
}
