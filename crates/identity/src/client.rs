//! HTTP implementation of [`IdentityProvider`].

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::IdentityError;
use crate::provider::{IdentityProvider, IdentityUser, Session, SignUp};

/// Keys the provider uses for error messages, in the order they are tried.
const ERROR_MESSAGE_KEYS: &[&str] = &["msg", "error_description", "message", "error"];

/// REST client for a GoTrue-compatible identity service.
///
/// Every request carries the project `apikey` header; user-scoped calls
/// additionally carry the caller's bearer token.
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    authorize_base: Url,
    api_key: String,
}

impl IdentityClient {
    /// Create a client for the identity service at `base_url`
    /// (e.g. `https://<project>.supabase.co/auth/v1`).
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not a valid URL, which is the desired
    /// behaviour -- we want misconfiguration to fail at startup.
    pub fn new(base_url: &str, api_key: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let authorize_base = Url::parse(&format!("{base_url}/authorize"))
            .unwrap_or_else(|e| panic!("Invalid identity base URL '{base_url}': {e}"));

        Self {
            http: reqwest::Client::new(),
            base_url,
            authorize_base,
            api_key,
        }
    }

    /// Decode a 2xx JSON body into `T`, ignoring fields we do not model.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, IdentityError> {
        let value = Self::parse_json(response).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Read the body as JSON, mapping non-2xx responses to [`IdentityError::Api`].
    async fn parse_json(response: reqwest::Response) -> Result<serde_json::Value, IdentityError> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Ensure a 2xx status, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), IdentityError> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    async fn api_error(response: reqwest::Response) -> IdentityError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        extract_api_error(status, &body)
    }
}

/// Pull the human-readable message out of a provider error body.
///
/// The provider is inconsistent about the key it uses, so the known keys
/// are tried in order; an unparseable body is passed through as-is.
fn extract_api_error(status: u16, body: &str) -> IdentityError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ERROR_MESSAGE_KEYS
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string());

    IdentityError::Api { status, message }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, IdentityError> {
        let response = self
            .http
            .post(format!("{}/signup", self.base_url))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let value = Self::parse_json(response).await?;

        // Auto-confirming projects answer with a full session; projects
        // with email confirmation answer with just the user object.
        if value.get("access_token").is_some() {
            let session: Session = serde_json::from_value(value)?;
            Ok(SignUp {
                user: Some(session.user.clone()),
                session: Some(session),
            })
        } else {
            let user: IdentityUser = serde_json::from_value(value)?;
            Ok(SignUp {
                user: Some(user),
                session: None,
            })
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError> {
        let response = self
            .http
            .post(format!("{}/token?grant_type=password", self.base_url))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let response = self
            .http
            .get(format!("{}/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        let response = self
            .http
            .put(format!("{}/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "password": new_password }))
            .send()
            .await?;

        Self::check_status(response).await
    }

    async fn sign_in_with_id_token(
        &self,
        provider: &str,
        id_token: &str,
    ) -> Result<Session, IdentityError> {
        let response = self
            .http
            .post(format!("{}/token?grant_type=id_token", self.base_url))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "provider": provider, "id_token": id_token }))
            .send()
            .await?;

        Self::parse(response).await
    }

    fn authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        let mut url = self.authorize_base.clone();
        url.query_pairs_mut()
            .append_pair("provider", provider)
            .append_pair("redirect_to", redirect_to);
        url.to_string()
    }
}
