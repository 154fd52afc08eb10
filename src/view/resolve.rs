//! Turning a destination reference into a [`LinkModel`].

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::model::WebUrl;
use crate::view::{LinkModel, PageLink, PageSlot, StringLink, StringUrl, Url, UrlLink, View};

/// Anything a link can point at.
///
/// The variants are checked in declaration order, which matters because the
/// categories overlap: every [`LinkModel`] is also a [`Url`], and a `Url`
/// type may also implement `Display`. Conversions pick the earliest variant
/// a type qualifies for.
#[derive(Clone)]
pub enum LinkSource {
    /// A rebindable page reference. The slot is shared, not copied.
    Page(PageSlot),
    /// An existing link.
    Model(Rc<dyn LinkModel>),
    /// A URL-producing object that is not itself a link.
    Url(Rc<dyn Url>),
    /// A value whose `Display` output is the URL.
    Display(Rc<dyn fmt::Display>),
    /// A dynamic value; only JSON strings are accepted.
    Value(Value),
}

impl LinkSource {
    pub fn model(model: impl LinkModel + 'static) -> Self {
        Self::Model(Rc::new(model))
    }

    pub fn url(url: impl Url + 'static) -> Self {
        Self::Url(Rc::new(url))
    }

    pub fn display(value: impl fmt::Display + 'static) -> Self {
        Self::Display(Rc::new(value))
    }

    fn kind(&self) -> &'static str {
        match self {
            LinkSource::Page(_) => "page",
            LinkSource::Model(_) => "model",
            LinkSource::Url(_) => "url",
            LinkSource::Display(_) => "display",
            LinkSource::Value(_) => "value",
        }
    }
}

impl From<PageSlot> for LinkSource {
    fn from(slot: PageSlot) -> Self {
        Self::Page(slot)
    }
}

impl From<Rc<dyn LinkModel>> for LinkSource {
    fn from(model: Rc<dyn LinkModel>) -> Self {
        Self::Model(model)
    }
}

impl From<Rc<dyn Url>> for LinkSource {
    fn from(url: Rc<dyn Url>) -> Self {
        Self::Url(url)
    }
}

impl From<StringUrl> for LinkSource {
    fn from(url: StringUrl) -> Self {
        Self::url(url)
    }
}

impl From<WebUrl> for LinkSource {
    fn from(url: WebUrl) -> Self {
        Self::url(url)
    }
}

impl From<&str> for LinkSource {
    fn from(s: &str) -> Self {
        Self::Value(Value::String(s.to_string()))
    }
}

impl From<String> for LinkSource {
    fn from(s: String) -> Self {
        Self::Value(Value::String(s))
    }
}

impl From<Value> for LinkSource {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkSource::Page(slot) => f.debug_tuple("Page").field(slot).finish(),
            LinkSource::Model(_) => f.debug_tuple("Model").finish_non_exhaustive(),
            LinkSource::Url(_) => f.debug_tuple("Url").finish_non_exhaustive(),
            LinkSource::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
            LinkSource::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

/// Resolves `source` into a link, using `content` as its visible content.
///
/// - A page slot becomes a [`PageLink`] bound to that slot.
/// - An existing link is returned as-is (same `Rc`) when `content` is empty;
///   otherwise it becomes the URL of a new [`UrlLink`] carrying `content`,
///   and its own title and content are no longer consulted.
/// - Any other [`Url`] becomes a [`UrlLink`].
/// - A `Display` value or a JSON string becomes a [`StringLink`].
///
/// An empty `content` leaves the link's content unset so it falls back to
/// the title at render time; otherwise all items are combined into one
/// [`View::Views`].
///
/// # Panics
///
/// Panics if `source` is a [`Value`] other than a string. That is a caller
/// bug, not a runtime condition.
pub fn resolve(source: impl Into<LinkSource>, content: Vec<View>) -> Rc<dyn LinkModel> {
    let source = source.into();
    tracing::debug!(kind = source.kind(), items = content.len(), "resolving link source");

    let content = (!content.is_empty()).then(|| View::Views(content));

    match source {
        LinkSource::Page(page) => Rc::new(PageLink {
            page,
            content,
            title: String::new(),
            rel: String::new(),
        }),
        LinkSource::Model(model) => match content {
            None => model,
            Some(content) => {
                let url: Rc<dyn Url> = model;
                Rc::new(UrlLink::new(url).with_content(content))
            }
        },
        LinkSource::Url(url) => Rc::new(UrlLink {
            url,
            content,
            title: String::new(),
            rel: String::new(),
        }),
        LinkSource::Display(value) => string_link(value.to_string(), content),
        LinkSource::Value(Value::String(s)) => string_link(s, content),
        LinkSource::Value(other) => panic!("Invalid type for url: {}", json_kind(&other)),
    }
}

fn string_link(url: String, content: Option<View>) -> Rc<dyn LinkModel> {
    Rc::new(StringLink {
        url,
        content,
        title: String::new(),
        rel: String::new(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
