//! Local session persistence.
//!
//! Two values are stored separately: the opaque `auth_token` string and
//! the JSON-encoded `user_data` record. The default implementation keeps
//! both in the OS keyring under the `dinonest` service.

use crate::auth::client::User;
use crate::error::AuthError;

const SERVICE: &str = "dinonest";
const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user_data";

/// Storage seam for the authenticated session.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Result<Option<String>, AuthError>;
    fn set_token(&self, token: &str) -> Result<(), AuthError>;
    fn user(&self) -> Result<Option<User>, AuthError>;
    fn set_user(&self, user: &User) -> Result<(), AuthError>;
    /// Remove both stored values; absent entries are not an error.
    fn clear(&self) -> Result<(), AuthError>;

    fn is_authenticated(&self) -> bool {
        self.token().ok().flatten().is_some()
    }
}

/// Keyring-backed session store.
#[derive(Debug, Default)]
pub struct KeyringSession;

impl KeyringSession {
    fn get(key: &str) -> Result<Option<String>, AuthError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(key: &str, value: &str) -> Result<(), AuthError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    fn delete(key: &str) -> Result<(), AuthError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for KeyringSession {
    fn token(&self) -> Result<Option<String>, AuthError> {
        Self::get(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) -> Result<(), AuthError> {
        Self::set(TOKEN_KEY, token)
    }

    fn user(&self) -> Result<Option<User>, AuthError> {
        match Self::get(USER_KEY)? {
            // Tolerate stale/garbled records rather than locking the user out
            Some(raw) => Ok(serde_json::from_str(&raw).ok()),
            None => Ok(None),
        }
    }

    fn set_user(&self, user: &User) -> Result<(), AuthError> {
        let raw = serde_json::to_string(user)?;
        Self::set(USER_KEY, &raw)
    }

    fn clear(&self) -> Result<(), AuthError> {
        Self::delete(TOKEN_KEY)?;
        Self::delete(USER_KEY)?;
        Ok(())
    }
}
