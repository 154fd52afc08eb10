//! # linkgate
//!
//! Link resolution and access decisions for server-side page rendering.
//!
//! ## Architecture
//!
//! - **View Layer** ([`view`]) - turns a destination reference into a
//!   render-ready [`view::LinkModel`] (URL, content, title, `rel`)
//! - **Auth Layer** ([`auth`]) - composable boolean policies evaluated
//!   against a request [`view::Context`]
//! - **Model Layer** ([`model`]) - self-validating field values
//!   ([`model::Color`], [`model::WebUrl`]) checked against [`model::MetaData`]
//!
//! The two halves share only the [`view::Context`] type; neither calls the
//! other.
//!
//! ## Example
//!
//! ```rust
//! use linkgate::prelude::*;
//!
//! let ctx = Context::new("/");
//!
//! let link = resolve("/about", vec![]);
//! assert_eq!(link.url(&ctx, &[]), "/about");
//! assert_eq!(link.link_content(&ctx), View::text("/about"));
//!
//! let policy = AnyAuthenticator::new(vec![Box::new(BoolAuth(false)), Box::new(BoolAuth(true))]);
//! assert!(policy.authenticate(&ctx).unwrap());
//! ```
//!
//! ## Errors
//!
//! Recoverable failures are [`AppError`] values. Caller bugs (an
//! unsupported link source, a malformed colour literal passed to
//! [`model::Color::set`]) panic.
//!
//! ## Configuration
//!
//! The `linkgate` binary reads its settings from environment variables via
//! [`config::Config`].

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::auth::{
        AllAuthenticators, AnyAuthenticator, AuthPolicy, Authenticator, BoolAuth,
        NotAuthenticator, TokenAuthenticator, authorize,
    };
    pub use crate::error::AppError;
    pub use crate::model::{Color, FieldValue, MetaData, WebUrl};
    pub use crate::view::{
        Context, LinkModel, LinkSource, Page, PageLink, PageSlot, StringLink, Url, UrlLink, View,
        resolve,
    };
}
