//! Link resolution for page rendering.
//!
//! A destination reference (a page slot, an existing link, a URL-producing
//! object, a displayable value or a plain string) is turned into a
//! [`LinkModel`] by [`resolve`]. The model answers the four questions a
//! renderer asks about a link: its URL, visible content, title and `rel`.
//!
//! # Modules
//!
//! - [`context`] - per-request state passed to every call
//! - [`node`] - the [`View`] renderable node
//! - [`url`] - the [`Url`] capability and [`StringUrl`]
//! - [`page`] - the [`Page`] contract and the rebindable [`PageSlot`]
//! - [`link`] - [`LinkModel`] and its three variants
//! - [`resolve`](mod@resolve) - dispatch from [`LinkSource`] to a variant

pub mod context;
pub mod link;
pub mod node;
pub mod page;
pub mod resolve;
pub mod url;

pub use context::Context;
pub use link::{LinkModel, PageLink, StringLink, UrlLink};
pub use node::View;
pub use page::{Page, PageSlot, StaticPage};
pub use resolve::{LinkSource, resolve};
pub use url::{StringUrl, Url};
