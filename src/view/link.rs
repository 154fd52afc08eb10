//! Render-ready links.
//!
//! All three variants share the same optional `content`, `title` and `rel`
//! fields and differ only in where the URL and the default title come from.
//! Defaults are computed on every call, never cached, so a title that depends
//! on the request or on a rebound page is always current.

use std::fmt;
use std::rc::Rc;

use crate::view::{Context, Page, PageSlot, StringUrl, Url, View};

/// A link as seen by a renderer.
pub trait LinkModel: Url {
    /// Visible content. Falls back to [`LinkModel::link_title`] as text.
    fn link_content(&self, ctx: &Context) -> View;

    fn link_title(&self, ctx: &Context) -> String;

    fn link_rel(&self, ctx: &Context) -> String;
}

fn content_or_title(content: Option<&View>, title: impl FnOnce() -> String) -> View {
    match content {
        Some(view) => view.clone(),
        None => View::Text(title()),
    }
}

/// A link to a page held in a [`PageSlot`].
#[derive(Debug, Clone)]
pub struct PageLink {
    pub page: PageSlot,
    /// If `None`, the link title is used.
    pub content: Option<View>,
    /// If empty, the page's own link title is used.
    pub title: String,
    pub rel: String,
}

impl PageLink {
    pub fn new(page: PageSlot, title: impl Into<String>) -> Self {
        Self {
            page,
            content: None,
            title: title.into(),
            rel: String::new(),
        }
    }

    pub fn with_content(mut self, content: View) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }
}

impl Url for PageLink {
    fn url(&self, ctx: &Context, args: &[&str]) -> String {
        self.page.url(ctx, args)
    }
}

impl LinkModel for PageLink {
    fn link_content(&self, ctx: &Context) -> View {
        content_or_title(self.content.as_ref(), || self.link_title(ctx))
    }

    fn link_title(&self, ctx: &Context) -> String {
        if self.title.is_empty() {
            return self.page.link_title(ctx);
        }
        self.title.clone()
    }

    fn link_rel(&self, _ctx: &Context) -> String {
        self.rel.clone()
    }
}

/// A link to a literal URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLink {
    pub url: String,
    /// If `None`, the link title is used.
    pub content: Option<View>,
    /// If empty, the URL literal is used.
    pub title: String,
    pub rel: String,
}

impl StringLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: None,
            title: String::new(),
            rel: String::new(),
        }
    }

    pub fn with_content(mut self, content: View) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }
}

impl Url for StringLink {
    fn url(&self, ctx: &Context, args: &[&str]) -> String {
        StringUrl::new(self.url.as_str()).url(ctx, args)
    }
}

impl LinkModel for StringLink {
    fn link_content(&self, ctx: &Context) -> View {
        content_or_title(self.content.as_ref(), || self.link_title(ctx))
    }

    fn link_title(&self, _ctx: &Context) -> String {
        if self.title.is_empty() {
            return self.url.clone();
        }
        self.title.clone()
    }

    fn link_rel(&self, _ctx: &Context) -> String {
        self.rel.clone()
    }
}

/// A link whose URL comes from another [`Url`] implementor.
#[derive(Clone)]
pub struct UrlLink {
    pub url: Rc<dyn Url>,
    /// If `None`, the link title is used.
    pub content: Option<View>,
    /// If empty, the URL built without arguments is used.
    pub title: String,
    pub rel: String,
}

impl UrlLink {
    pub fn new(url: Rc<dyn Url>) -> Self {
        Self {
            url,
            content: None,
            title: String::new(),
            rel: String::new(),
        }
    }

    pub fn with_content(mut self, content: View) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }
}

impl Url for UrlLink {
    fn url(&self, ctx: &Context, args: &[&str]) -> String {
        self.url.url(ctx, args)
    }
}

impl LinkModel for UrlLink {
    fn link_content(&self, ctx: &Context) -> View {
        content_or_title(self.content.as_ref(), || self.link_title(ctx))
    }

    fn link_title(&self, ctx: &Context) -> String {
        if self.title.is_empty() {
            return self.url.url(ctx, &[]);
        }
        self.title.clone()
    }

    fn link_rel(&self, _ctx: &Context) -> String {
        self.rel.clone()
    }
}

impl fmt::Debug for UrlLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlLink")
            .field("content", &self.content)
            .field("title", &self.title)
            .field("rel", &self.rel)
            .finish_non_exhaustive()
    }
}
