//! HTTP request handlers.

pub mod auth;
pub mod country;
pub mod health;
pub mod me;
