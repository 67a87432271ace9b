//! Provider trait and the session/user types it vends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentityError;

/// A user as reported by the identity provider.
///
/// Only the fields this system consumes; everything else the provider
/// returns is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: Uuid,
    pub email: String,
}

/// A bearer session issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: IdentityUser,
}

/// Outcome of a sign-up.
///
/// The provider returns a session only when it auto-confirms the new
/// account; with email confirmation enabled, `session` is `None` and the
/// client must confirm before logging in.
#[derive(Debug, Clone, Serialize)]
pub struct SignUp {
    pub user: Option<IdentityUser>,
    pub session: Option<Session>,
}

/// Operations this system needs from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new email/password user.
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, IdentityError>;

    /// Exchange email/password credentials for a session.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError>;

    /// Verify a bearer token, returning the user it belongs to.
    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError>;

    /// Change the password of the user the token belongs to.
    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), IdentityError>;

    /// Exchange an OAuth ID token (native app flow) for a session.
    async fn sign_in_with_id_token(
        &self,
        provider: &str,
        id_token: &str,
    ) -> Result<Session, IdentityError>;

    /// Browser-flow OAuth entry point: the URL to redirect the user to.
    fn authorize_url(&self, provider: &str, redirect_to: &str) -> String;
}
