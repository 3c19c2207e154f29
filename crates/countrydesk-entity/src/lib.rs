//! # countrydesk-entity
//!
//! Domain entity models for CountryDesk. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow`.

pub mod country;
pub mod user;
