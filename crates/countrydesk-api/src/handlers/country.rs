//! Country lookup handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::request::CountryQuery;
use crate::dto::response::CountryResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/countries
pub async fn list_countries(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<Vec<CountryResponse>>, ApiError> {
    let countries = state
        .country_service
        .list(query.region.as_deref())
        .await?;

    Ok(Json(countries.into_iter().map(CountryResponse::from).collect()))
}

/// GET /api/countries/{alpha2}
pub async fn get_country(
    State(state): State<AppState>,
    Path(alpha2): Path<String>,
) -> Result<Json<CountryResponse>, ApiError> {
    let country = state.country_service.get_by_alpha2(&alpha2).await?;
    Ok(Json(country.into()))
}
