//! Response DTOs.

use serde::{Deserialize, Serialize};

use countrydesk_entity::country::Country;

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for protected endpoints.
    pub token: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `ok`.
    pub status: String,
}

/// Public view of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    /// English short name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: String,
    /// Region, `null` when unknown.
    pub region: Option<String>,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            name: country.name,
            alpha2: country.alpha2,
            alpha3: country.alpha3,
            region: country.region,
        }
    }
}
