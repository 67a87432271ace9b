//! Client for the hosted identity provider.
//!
//! The provider owns credentials, token issuance, and verification; this
//! crate only speaks its REST API (a GoTrue-compatible surface): sign-up,
//! password grant, bearer-token verification, password update, and the
//! two Google sign-in shapes (web redirect URL, native ID-token grant).
//!
//! The API layer consumes the [`IdentityProvider`] trait so tests can
//! substitute a stub without an HTTP server.

mod client;
mod error;
mod provider;

pub use client::IdentityClient;
pub use error::IdentityError;
pub use provider::{IdentityProvider, IdentityUser, Session, SignUp};
