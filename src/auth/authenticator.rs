//! Boolean access policies and their combinators.

use serde_json::json;

use crate::error::AppError;
use crate::view::Context;

/// Authenticates the user of a request context.
///
/// `Ok(false)` is an ordinary denial. `Err(_)` means the decision could not
/// be made (a backend lookup failed, ...) and must not be read as a denial.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError>;
}

impl<A: Authenticator + ?Sized> Authenticator for Box<A> {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        (**self).authenticate(ctx)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for std::sync::Arc<A> {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        (**self).authenticate(ctx)
    }
}

/// Always returns its value. Useful for debugging and as a policy leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolAuth(pub bool);

impl Authenticator for BoolAuth {
    fn authenticate(&self, _ctx: &Context) -> Result<bool, AppError> {
        Ok(self.0)
    }
}

/// Adapts a closure into an [`Authenticator`].
pub struct FnAuth<F>(pub F);

impl<F> Authenticator for FnAuth<F>
where
    F: Fn(&Context) -> Result<bool, AppError> + Send + Sync,
{
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        (self.0)(ctx)
    }
}

/// Returns true if any of its authenticators returns true.
///
/// Children run in order. The first `Ok(true)` or the first error ends the
/// evaluation and is returned. An empty list denies.
#[derive(Default)]
pub struct AnyAuthenticator(pub Vec<Box<dyn Authenticator>>);

impl AnyAuthenticator {
    pub fn new(auths: Vec<Box<dyn Authenticator>>) -> Self {
        Self(auths)
    }

    pub fn push(&mut self, auth: impl Authenticator + 'static) {
        self.0.push(Box::new(auth));
    }
}

impl Authenticator for AnyAuthenticator {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        for (i, auth) in self.0.iter().enumerate() {
            match auth.authenticate(ctx) {
                Ok(false) => {}
                Ok(true) => {
                    tracing::debug!(index = i, "any: granted");
                    return Ok(true);
                }
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "any: authenticator failed");
                    return Err(e);
                }
            }
        }
        Ok(false)
    }
}

/// Returns true if all of its authenticators return true.
///
/// Children run in order. The first denial or error ends the evaluation and
/// is returned. An empty list grants.
#[derive(Default)]
pub struct AllAuthenticators(pub Vec<Box<dyn Authenticator>>);

impl AllAuthenticators {
    pub fn new(auths: Vec<Box<dyn Authenticator>>) -> Self {
        Self(auths)
    }

    pub fn push(&mut self, auth: impl Authenticator + 'static) {
        self.0.push(Box::new(auth));
    }
}

impl Authenticator for AllAuthenticators {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        for (i, auth) in self.0.iter().enumerate() {
            match auth.authenticate(ctx) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(index = i, "all: denied");
                    return Ok(false);
                }
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "all: authenticator failed");
                    return Err(e);
                }
            }
        }
        Ok(true)
    }
}

/// Inverts its child's decision. Errors pass through unchanged.
pub struct NotAuthenticator(pub Box<dyn Authenticator>);

impl NotAuthenticator {
    pub fn new(auth: impl Authenticator + 'static) -> Self {
        Self(Box::new(auth))
    }
}

impl Authenticator for NotAuthenticator {
    fn authenticate(&self, ctx: &Context) -> Result<bool, AppError> {
        self.0.authenticate(ctx).map(|ok| !ok)
    }
}

/// Runs `auth` and fails closed.
///
/// # Errors
///
/// Returns the authenticator's own error if it failed, and
/// [`AppError::Unauthorized`] if it denied the request.
pub fn authorize(ctx: &Context, auth: &dyn Authenticator) -> Result<(), AppError> {
    if auth.authenticate(ctx)? {
        return Ok(());
    }

    Err(AppError::unauthorized(
        "Unauthorized",
        json!({ "path": ctx.path() }),
    ))
}
