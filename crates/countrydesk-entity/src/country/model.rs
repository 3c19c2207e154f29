//! Country entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the read-only `countries` reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Country {
    /// Surrogate key; not exposed over HTTP.
    #[serde(skip_serializing, default)]
    pub id: i32,
    /// English short name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: String,
    /// Geographic region, when known.
    pub region: Option<String>,
}

impl Country {
    /// Whether the country belongs to `region` (exact match).
    pub fn in_region(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }
}
