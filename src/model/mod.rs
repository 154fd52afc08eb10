//! Self-validating model values.
//!
//! Values in this module share one lifecycle: they start empty, are changed
//! only through a normalising setter that panics on malformed literals, and
//! are checked against field [`MetaData`] with [`FieldValue::validate`],
//! which reports problems as ordinary [`crate::AppError`]s.
//!
//! - [`Color`] - `#rrggbbaa` web colours
//! - [`WebUrl`] - normalised http(s) URLs

pub mod color;
pub mod metadata;
pub mod value;
pub mod web_url;

pub use color::{Color, Rgba};
pub use metadata::MetaData;
pub use value::FieldValue;
pub use web_url::WebUrl;
