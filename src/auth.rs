//! Bearer-token authentication.
//!
//! The API trusts an [`Authenticator`] to turn the `Authorization` header into
//! an [`Identity`]. The production implementation is a static token table from
//! `[auth]` in `pagesmith.toml`.

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use std::collections::HashMap;
use thiserror::Error;

use crate::config::AuthConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid bearer token")]
    InvalidToken,
}

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
}

impl Identity {
    /// Display name of the organization lazily created for this identity.
    ///
    /// `"jane@acme.io"` → `"jane's Organization"`; without an email the user
    /// id stands in for the local part.
    pub fn organization_name(&self) -> String {
        let owner = self
            .email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or(&self.user_id);
        format!("{owner}'s Organization")
    }
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Token table loaded from config.
pub struct TokenAuthenticator {
    tokens: HashMap<String, Identity>,
}

impl TokenAuthenticator {
    pub fn from_config(config: &AuthConfig) -> Self {
        let tokens = config
            .tokens
            .iter()
            .map(|entry| {
                (
                    entry.token.clone(),
                    Identity {
                        user_id: entry.user_id.clone(),
                        email: entry.email.clone(),
                    },
                )
            })
            .collect();
        Self { tokens }
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;
    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(AuthError::InvalidToken)?;
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenEntry;
    use axum::http::HeaderValue;

    fn identity(email: Option<&str>) -> Identity {
        Identity {
            user_id: "user-42".to_string(),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn organization_name_uses_email_local_part() {
        assert_eq!(
            identity(Some("jane@acme.io")).organization_name(),
            "jane's Organization"
        );
    }

    #[test]
    fn organization_name_falls_back_to_user_id() {
        assert_eq!(identity(None).organization_name(), "user-42's Organization");
        assert_eq!(
            identity(Some("@acme.io")).organization_name(),
            "user-42's Organization"
        );
    }

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), Err(AuthError::InvalidToken));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer s3cret"));
        assert_eq!(bearer_token(&headers), Ok("s3cret"));
    }

    #[tokio::test]
    async fn token_table_lookup() {
        let auth = TokenAuthenticator::from_config(&AuthConfig {
            tokens: vec![TokenEntry {
                token: "s3cret".to_string(),
                user_id: "u1".to_string(),
                email: Some("a@b.c".to_string()),
            }],
        });
        let id = auth.authenticate("s3cret").await.unwrap();
        assert_eq!(id.user_id, "u1");
        assert_eq!(auth.authenticate("other").await, Err(AuthError::InvalidToken));
    }
}
