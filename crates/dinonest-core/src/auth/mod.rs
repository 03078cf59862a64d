//! Authentication: proxy-backed login/logout and local session storage.

pub mod client;
pub mod session;

pub use client::{AuthClient, AuthResponse, LoginRequest, User};
pub use session::{KeyringSession, SessionStore};
