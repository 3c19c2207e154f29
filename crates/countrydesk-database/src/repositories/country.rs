//! Country repository implementation.

use sqlx::PgPool;

use countrydesk_core::error::{AppError, ErrorKind};
use countrydesk_core::result::AppResult;
use countrydesk_entity::country::Country;

/// Read-only repository over the `countries` reference table.
#[derive(Debug, Clone)]
pub struct CountryRepository {
    pool: PgPool,
}

impl CountryRepository {
    /// Create a new country repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every country ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Country>> {
        sqlx::query_as::<_, Country>("SELECT * FROM countries ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list countries", e))
    }

    /// List the countries of one region ordered by name.
    pub async fn find_by_region(&self, region: &str) -> AppResult<Vec<Country>> {
        sqlx::query_as::<_, Country>(
            "SELECT * FROM countries WHERE region = $1 ORDER BY name ASC",
        )
        .bind(region)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list countries by region", e)
        })
    }

    /// Find a country by its alpha-2 code (already normalized by the caller).
    pub async fn find_by_alpha2(&self, alpha2: &str) -> AppResult<Option<Country>> {
        sqlx::query_as::<_, Country>("SELECT * FROM countries WHERE alpha2 = $1")
            .bind(alpha2)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find country by code", e)
            })
    }
}
