//! # countrydesk-service
//!
//! Business logic service layer for CountryDesk. Each service composes
//! stores, the password hasher, and the token service into the
//! application-level use cases the HTTP layer exposes.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod country;

pub use auth::AuthService;
pub use country::{CountryCatalog, CountryService, StaticCountryCatalog};
