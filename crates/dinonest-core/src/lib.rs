//! # Dinonest Core Library
//!
//! Core business logic for Dinonest, a savings-goal tracker: users create
//! a goal (title, target amount, duration), log deposits toward it, and
//! build a check-in streak with motivational feedback.
//!
//! The library follows a CLI-first philosophy: every operation is available
//! through the standalone CLI binary, and the auth proxy server is a thin
//! relay over the same types.
//!
//! ## Key components
//!
//! - [`GoalStore`]: goal and streak state, persisted to a JSON blob in the
//!   application data directory and reloaded on startup
//! - [`AuthClient`]: login/logout through the local auth proxy, with the
//!   session held in the OS keyring
//! - [`Config`]: TOML-based application configuration
//! - [`quotes`]: motivational quotes and streak milestone messages

pub mod auth;
pub mod error;
pub mod goals;
pub mod quotes;
pub mod storage;

pub use auth::{AuthClient, SessionStore};
pub use error::{AuthError, ConfigError, CoreError, StorageError};
pub use goals::store::GoalStore;
pub use goals::{Goal, GoalDuration, Streak};
pub use storage::Config;
