//! Renderable view nodes.

use std::fmt;

/// A renderable node.
///
/// Link resolution only builds and combines views; escaping and
/// serialisation belong to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Plain text, escaped by the renderer.
    Text(String),
    /// Markup emitted as-is.
    Html(String),
    /// Children rendered in order.
    Views(Vec<View>),
}

impl View {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }

    pub fn views(items: impl IntoIterator<Item = View>) -> Self {
        Self::Views(items.into_iter().collect())
    }
}

impl From<&str> for View {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for View {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Concatenated raw contents, for diagnostics.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Text(s) | View::Html(s) => f.write_str(s),
            View::Views(items) => items.iter().try_for_each(|v| fmt::Display::fmt(v, f)),
        }
    }
}
