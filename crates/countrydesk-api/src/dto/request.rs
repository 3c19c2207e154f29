//! Request DTOs.
//!
//! Every field is optional so that absent and empty values reach the
//! workflow, which owns the missing-field checks.

use serde::{Deserialize, Serialize};

/// Register and sign-in request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsRequest {
    /// Login name.
    pub login: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Login, or empty when absent.
    pub fn login(&self) -> &str {
        self.login.as_deref().unwrap_or_default()
    }

    /// Password, or empty when absent.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

/// Password change request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePasswordRequest {
    /// Current password.
    pub old_password: Option<String>,
    /// Replacement password.
    pub new_password: Option<String>,
}

impl UpdatePasswordRequest {
    /// Old password, or empty when absent.
    pub fn old_password(&self) -> &str {
        self.old_password.as_deref().unwrap_or_default()
    }

    /// New password, or empty when absent.
    pub fn new_password(&self) -> &str {
        self.new_password.as_deref().unwrap_or_default()
    }
}

/// Query string of the country listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryQuery {
    /// Restrict the listing to one region.
    pub region: Option<String>,
}
