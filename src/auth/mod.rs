//! Access decisions for a request [`Context`](crate::view::Context).
//!
//! An [`Authenticator`] answers `Ok(true)` (allow), `Ok(false)` (deny) or
//! `Err(_)` (could not decide). Leaves such as [`BoolAuth`] and
//! [`TokenAuthenticator`] are combined with [`AnyAuthenticator`],
//! [`AllAuthenticators`] and [`NotAuthenticator`], either in code or from a
//! declarative [`AuthPolicy`].

pub mod authenticator;
pub mod policy;
pub mod token;

pub use authenticator::{
    AllAuthenticators, AnyAuthenticator, Authenticator, BoolAuth, FnAuth, NotAuthenticator,
    authorize,
};
pub use policy::AuthPolicy;
pub use token::{MemoryTokenStore, TokenAuthenticator, TokenStore, hash_token};
