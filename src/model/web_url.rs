//! Normalised http(s) URL value.
//!
//! Ensures consistent URL representation by lower-casing hostnames, removing
//! fragments, and dropping default ports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::ValidateUrl;

use crate::error::AppError;
use crate::model::FieldValue;
use crate::view::{Context, Url};

/// An absolute http(s) URL in normalised form, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebUrl(String);

impl WebUrl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already stored string without normalising it.
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    /// Normalises and stores `s`; the empty string clears the value.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not an absolute http or https URL. Use
    /// [`WebUrl::try_set`] for untrusted input.
    pub fn set(&mut self, s: &str) {
        match normalize_url(s) {
            Ok(v) => self.0 = v,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_set(&mut self, s: &str) -> Result<(), AppError> {
        self.0 = normalize_url(s)?;
        Ok(())
    }
}

/// Normalises a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Fragments**: Removed (e.g., `#section`)
/// 5. **Query parameters** and **path**: Preserved as-is
///
/// The empty string normalises to itself.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed URLs and non-HTTP(S) schemes.
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let mut url = url::Url::parse(input)
        .map_err(|e| rejected(input, format!("Invalid URL format: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "Only HTTP and HTTPS protocols are allowed",
            json!({ "value": input, "scheme": url.scheme() }),
        ));
    }

    url.set_fragment(None);

    if let Some(host) = url.host_str().map(str::to_ascii_lowercase) {
        url.set_host(Some(&host))
            .map_err(|_| rejected(input, "Failed to set normalized host"))?;
    }

    if url.port().is_some() && url.port() == default_port(url.scheme()) {
        url.set_port(None)
            .map_err(|_| rejected(input, "Failed to remove default port"))?;
    }

    Ok(url.to_string())
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

fn rejected(input: &str, message: impl Into<String>) -> AppError {
    AppError::bad_request(message, json!({ "value": input }))
}

impl FieldValue for WebUrl {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn is_valid(&self) -> bool {
        self.0.is_empty()
            || (self.0.validate_url()
                && (self.0.starts_with("http://") || self.0.starts_with("https://")))
    }

    fn format_error(&self) -> AppError {
        AppError::bad_request(
            format!("Invalid URL: {}", self.0),
            json!({ "value": self.0 }),
        )
    }
}

impl Url for WebUrl {
    fn url(&self, _ctx: &Context, _args: &[&str]) -> String {
        self.0.clone()
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WebUrl {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_url(s).map(Self)
    }
}

impl TryFrom<String> for WebUrl {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WebUrl> for String {
    fn from(u: WebUrl) -> Self {
        u.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetaData;

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(normalize_url("https://example.com").unwrap(), "https://example.com/");
    }

    #[test]
    fn test_normalize_uppercase_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_remove_default_ports() {
        assert_eq!(
            normalize_url("http://example.com:80/path").unwrap(),
            "http://example.com/path"
        );
        assert_eq!(
            normalize_url("https://example.com:443/path").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_normalize_keep_custom_port() {
        assert_eq!(
            normalize_url("https://example.com:8443/path").unwrap(),
            "https://example.com:8443/path"
        );
    }

    #[test]
    fn test_normalize_strips_fragment_keeps_query() {
        assert_eq!(
            normalize_url("https://example.com/page?q=1#section").unwrap(),
            "https://example.com/page?q=1"
        );
    }

    #[test]
    fn test_rejection_carries_input() {
        let err = normalize_url("not a url").unwrap_err();
        assert!(err.to_string().starts_with("Invalid URL format"));
        assert_eq!(err.details()["value"], "not a url");
    }

    #[test]
    fn test_reject_other_schemes() {
        let err = normalize_url("javascript:alert(1)").unwrap_err();
        assert_eq!(err.to_string(), "Only HTTP and HTTPS protocols are allowed");
        assert!(normalize_url("ftp://example.com").is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid URL format")]
    fn test_set_panics_on_garbage() {
        WebUrl::new().set("not a url");
    }

    #[test]
    fn test_validate_stored_values() {
        let meta = MetaData::parse("homepage", "required");

        assert!(matches!(
            WebUrl::new().validate(&meta),
            Err(AppError::Required { .. })
        ));
        assert!(matches!(
            WebUrl::from_raw("mailto:me@example.com").validate(&meta),
            Err(AppError::Validation { .. })
        ));
        assert!(WebUrl::from_raw("https://example.com/").validate(&meta).is_ok());
        assert!(WebUrl::new().validate(&MetaData::new("homepage")).is_ok());
    }
}
