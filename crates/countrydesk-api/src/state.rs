//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use countrydesk_auth::jwt::TokenService;
use countrydesk_auth::password::PasswordHasher;
use countrydesk_auth::store::UserStore;
use countrydesk_core::config::AppConfig;
use countrydesk_service::{AuthService, CountryCatalog, CountryService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, sign-in, and password changes
    pub auth_service: Arc<AuthService>,
    /// Country lookup
    pub country_service: Arc<CountryService>,
}

impl AppState {
    /// Wires the services on top of the given stores.
    pub fn new(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        countries: Arc<dyn CountryCatalog>,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            users,
            Arc::new(PasswordHasher::new()),
            Arc::new(TokenService::new(&config.auth)),
        ));
        let country_service = Arc::new(CountryService::new(countries));

        Self {
            config,
            auth_service,
            country_service,
        }
    }
}
