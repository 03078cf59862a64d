pub mod auth;
pub mod config;
pub mod goal;
pub mod quote;
pub mod streak;
