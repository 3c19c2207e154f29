//! Sources of country reference data.

use async_trait::async_trait;

use countrydesk_core::result::AppResult;
use countrydesk_database::repositories::CountryRepository;
use countrydesk_entity::country::Country;

/// Read-only access to the country reference table.
#[async_trait]
pub trait CountryCatalog: Send + Sync + 'static {
    /// Countries ordered by name, optionally restricted to one region.
    async fn list(&self, region: Option<&str>) -> AppResult<Vec<Country>>;

    /// Looks up a country by an already upper-cased alpha-2 code.
    async fn find_by_alpha2(&self, alpha2: &str) -> AppResult<Option<Country>>;
}

#[async_trait]
impl CountryCatalog for CountryRepository {
    async fn list(&self, region: Option<&str>) -> AppResult<Vec<Country>> {
        match region {
            Some(region) => self.find_by_region(region).await,
            None => self.find_all().await,
        }
    }

    async fn find_by_alpha2(&self, alpha2: &str) -> AppResult<Option<Country>> {
        CountryRepository::find_by_alpha2(self, alpha2).await
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCountryCatalog {
    countries: Vec<Country>,
}

impl StaticCountryCatalog {
    /// Builds a catalog, keeping the countries sorted by name.
    pub fn new(mut countries: Vec<Country>) -> Self {
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { countries }
    }
}

#[async_trait]
impl CountryCatalog for StaticCountryCatalog {
    async fn list(&self, region: Option<&str>) -> AppResult<Vec<Country>> {
        Ok(self
            .countries
            .iter()
            .filter(|c| region.is_none_or(|r| c.in_region(r)))
            .cloned()
            .collect())
    }

    async fn find_by_alpha2(&self, alpha2: &str) -> AppResult<Option<Country>> {
        Ok(self.countries.iter().find(|c| c.alpha2 == alpha2).cloned())
    }
}
