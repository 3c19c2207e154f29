//! Read-only country lookup.

pub mod catalog;
pub mod service;

pub use catalog::{CountryCatalog, StaticCountryCatalog};
pub use service::{COUNTRY_NOT_FOUND_MESSAGE, CountryService};
