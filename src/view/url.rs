//! The URL capability.

use crate::view::Context;

/// Anything that can produce a URL for the current request.
pub trait Url {
    /// Builds the URL; `args` fill positional parameters where the
    /// implementor supports them.
    fn url(&self, ctx: &Context, args: &[&str]) -> String;
}

/// A literal URL, optionally with `%s` placeholders.
///
/// Each `%s` is replaced by the next argument. Placeholders without an
/// argument are left in place and surplus arguments are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringUrl(pub String);

impl StringUrl {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Url for StringUrl {
    fn url(&self, _ctx: &Context, args: &[&str]) -> String {
        let mut args = args.iter();
        let mut parts = self.0.split("%s");
        let mut out = String::with_capacity(self.0.len());

        if let Some(first) = parts.next() {
            out.push_str(first);
        }
        for part in parts {
            out.push_str(args.next().copied().unwrap_or("%s"));
            out.push_str(part);
        }
        out
    }
}
