//! Country lookup service.

use std::sync::Arc;

use countrydesk_core::error::AppError;
use countrydesk_core::result::AppResult;
use countrydesk_entity::country::Country;

use super::catalog::CountryCatalog;

/// Returned when no country has the requested code.
pub const COUNTRY_NOT_FOUND_MESSAGE: &str = "Country not found";

/// Public read access to the country catalog.
#[derive(Clone)]
pub struct CountryService {
    catalog: Arc<dyn CountryCatalog>,
}

impl std::fmt::Debug for CountryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryService").finish_non_exhaustive()
    }
}

impl CountryService {
    /// Creates a new country service.
    pub fn new(catalog: Arc<dyn CountryCatalog>) -> Self {
        Self { catalog }
    }

    /// Lists countries ordered by name. An empty region means no filter.
    pub async fn list(&self, region: Option<&str>) -> AppResult<Vec<Country>> {
        let region = region.filter(|r| !r.is_empty());
        self.catalog.list(region).await
    }

    /// Gets one country by alpha-2 code, case-insensitively.
    pub async fn get_by_alpha2(&self, alpha2: &str) -> AppResult<Country> {
        let code = alpha2.to_uppercase();
        self.catalog
            .find_by_alpha2(&code)
            .await?
            .ok_or_else(|| AppError::not_found(COUNTRY_NOT_FOUND_MESSAGE))
    }
}
