//! Declarative authenticator trees.
//!
//! ```json
//! { "any": [ { "all": ["token", { "not": false }] }, false ] }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::{
    AllAuthenticators, AnyAuthenticator, Authenticator, BoolAuth, NotAuthenticator,
    TokenAuthenticator,
};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Builtin {
    /// Bearer/cookie API token, see [`TokenAuthenticator`].
    Token,
}

/// A serialisable authenticator tree.
///
/// Operator objects carry exactly one key. Anything else (two operators in
/// one object, a misspelt key) is rejected rather than partially read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "PolicyDoc")]
pub enum AuthPolicy {
    Bool(bool),
    Builtin(Builtin),
    Any { any: Vec<AuthPolicy> },
    All { all: Vec<AuthPolicy> },
    Not { not: Box<AuthPolicy> },
}

/// Wire shape of [`AuthPolicy`] with strict operator objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum PolicyDoc {
    Bool(bool),
    Builtin(Builtin),
    Any(AnyDoc),
    All(AllDoc),
    Not(NotDoc),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AnyDoc {
    any: Vec<AuthPolicy>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AllDoc {
    all: Vec<AuthPolicy>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NotDoc {
    not: Box<AuthPolicy>,
}

impl From<PolicyDoc> for AuthPolicy {
    fn from(doc: PolicyDoc) -> Self {
        match doc {
            PolicyDoc::Bool(value) => AuthPolicy::Bool(value),
            PolicyDoc::Builtin(builtin) => AuthPolicy::Builtin(builtin),
            PolicyDoc::Any(AnyDoc { any }) => AuthPolicy::Any { any },
            PolicyDoc::All(AllDoc { all }) => AuthPolicy::All { all },
            PolicyDoc::Not(NotDoc { not }) => AuthPolicy::Not { not },
        }
    }
}

impl AuthPolicy {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `s` is not a policy document.
    pub fn from_json(s: &str) -> Result<Self, AppError> {
        serde_json::from_str(s).map_err(|e| {
            AppError::bad_request(
                format!("Invalid auth policy: {e}"),
                json!({ "line": e.line(), "column": e.column() }),
            )
        })
    }

    /// Builds the authenticator tree. `token` backs every `"token"` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the policy uses `"token"` and no
    /// token authenticator was supplied.
    pub fn build(
        &self,
        token: Option<&TokenAuthenticator>,
    ) -> Result<Box<dyn Authenticator>, AppError> {
        let auth: Box<dyn Authenticator> = match self {
            AuthPolicy::Bool(value) => Box::new(BoolAuth(*value)),
            AuthPolicy::Builtin(Builtin::Token) => match token {
                Some(token) => Box::new(token.clone()),
                None => {
                    return Err(AppError::bad_request(
                        "Policy uses \"token\" but no token signing secret is configured",
                        json!({ "policy": "token" }),
                    ));
                }
            },
            AuthPolicy::Any { any } => Box::new(AnyAuthenticator::new(
                any.iter()
                    .map(|p| p.build(token))
                    .collect::<Result<_, _>>()?,
            )),
            AuthPolicy::All { all } => Box::new(AllAuthenticators::new(
                all.iter()
                    .map(|p| p.build(token))
                    .collect::<Result<_, _>>()?,
            )),
            AuthPolicy::Not { not } => Box::new(NotAuthenticator(not.build(token)?)),
        };
        Ok(auth)
    }
}
