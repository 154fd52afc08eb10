#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use linkgate::view::{Context, Page, Url};

/// A page whose title is read from the request context at call time.
pub struct ContextTitlePage {
    pub path: String,
    pub fallback: String,
}

impl Url for ContextTitlePage {
    fn url(&self, _ctx: &Context, args: &[&str]) -> String {
        match args.first() {
            Some(arg) => format!("{}/{}", self.path, arg),
            None => self.path.clone(),
        }
    }
}

impl Page for ContextTitlePage {
    fn link_title(&self, ctx: &Context) -> String {
        ctx.data("page_title")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.fallback)
            .to_string()
    }
}

/// A `Url` that counts how often it is asked for a URL.
pub struct CountingUrl {
    pub url: String,
    pub calls: Rc<Cell<usize>>,
}

impl CountingUrl {
    pub fn new(url: &str) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                url: url.to_string(),
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl Url for CountingUrl {
    fn url(&self, _ctx: &Context, _args: &[&str]) -> String {
        self.calls.set(self.calls.get() + 1);
        self.url.clone()
    }
}

pub fn ctx_with_title(title: &str) -> Context {
    let mut ctx = Context::new("/");
    ctx.set_data("page_title", title);
    ctx
}
