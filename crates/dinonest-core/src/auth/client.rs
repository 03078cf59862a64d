//! HTTP client for the auth proxy endpoints.
//!
//! Login surfaces the backend's error message on rejection; logout is
//! best-effort remote invalidation and always clears the local session,
//! so a network blip can never leave the user stuck logged in.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::session::{KeyringSession, SessionStore};
use crate::error::AuthError;

/// Authenticated user record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Client for the local auth proxy.
pub struct AuthClient {
    base_url: String,
    client: Client,
    session: Box<dyn SessionStore>,
}

impl AuthClient {
    /// Create a client against the given proxy base URL, with the session
    /// held in the OS keyring.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_session(base_url, Box::new(KeyringSession))
    }

    /// Create a client with a caller-supplied session store.
    pub fn with_session(base_url: impl Into<String>, session: Box<dyn SessionStore>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
            session,
        }
    }

    /// The session store backing this client.
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Log in through the proxy and persist the returned session.
    ///
    /// # Errors
    ///
    /// On a non-success status the error carries the backend's `error`
    /// message; transport failures surface as a request error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(AuthError::LoginFailed { status, message });
        }

        let auth: AuthResponse = resp.json().await?;
        self.session.set_token(&auth.token)?;
        self.session.set_user(&auth.user)?;
        Ok(auth)
    }

    /// Log out: post the bearer token to the proxy, then clear the local
    /// session unconditionally. Network failures are logged and swallowed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Some(token) = self.session.token()? {
            let result = self
                .client
                .post(format!("{}/api/auth/logout", self.base_url))
                .header("Authorization", format!("Bearer {token}"))
                .send()
                .await;
            match result {
                Ok(resp) if !resp.status().is_success() => {
                    eprintln!("Warning: logout request failed: HTTP {}", resp.status());
                }
                Err(e) => eprintln!("Warning: logout request failed: {e}"),
                Ok(_) => {}
            }
        }
        self.session.clear()
    }
}
