//! Auth workflows composing the user store, hasher, and token service.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use countrydesk_auth::jwt::{IssuedToken, Subject, TokenError, TokenService};
use countrydesk_auth::password::PasswordHasher;
use countrydesk_auth::store::UserStore;
use countrydesk_core::error::AppError;
use countrydesk_core::result::AppResult;

pub use countrydesk_database::repositories::user::DUPLICATE_LOGIN_MESSAGE;

/// Returned when register or sign-in is missing a field.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Login and password are required";
/// Returned for every failed sign-in, whatever the cause.
pub const INVALID_SIGN_IN_MESSAGE: &str = "Invalid login or password";
/// Returned when update-password is missing a field.
pub const MISSING_PASSWORDS_MESSAGE: &str = "Old password and new password are required";
/// Returned for every rejected update-password attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid or expired credentials";

/// Handles account registration, sign-in, and password changes.
#[derive(Clone)]
pub struct AuthService {
    /// User persistence.
    store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuance and verification.
    tokens: Arc<TokenService>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Registers a new account and returns its ID.
    ///
    /// No token is issued; the caller signs in separately.
    pub async fn register(&self, login: &str, password: &str) -> AppResult<Uuid> {
        if login.is_empty() || password.is_empty() {
            return Err(AppError::validation(MISSING_CREDENTIALS_MESSAGE));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user_id = self.store.create(login, &password_hash).await?;

        info!(user_id = %user_id, login = %login, "User registered");
        Ok(user_id)
    }

    /// Verifies credentials and issues a token stamped with the user's
    /// current token version.
    pub async fn sign_in(&self, login: &str, password: &str) -> AppResult<IssuedToken> {
        if login.is_empty() || password.is_empty() {
            return Err(AppError::validation(MISSING_CREDENTIALS_MESSAGE));
        }

        let Some(user) = self.store.find_by_login(login).await? else {
            self.hasher.verify_dummy(password);
            debug!(login = %login, reason = "unknown login", "Sign-in rejected");
            return Err(AppError::unauthorized(INVALID_SIGN_IN_MESSAGE));
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            debug!(user_id = %user.id, reason = "wrong password", "Sign-in rejected");
            return Err(AppError::unauthorized(INVALID_SIGN_IN_MESSAGE));
        }

        let issued = self.tokens.issue(
            &Subject::new(user.id, user.login.clone()),
            user.token_version,
            None,
        )?;

        info!(
            user_id = %user.id,
            token_version = user.token_version,
            "Sign-in successful"
        );
        Ok(issued)
    }

    /// Changes the password of the account named by `bearer_token`.
    ///
    /// Steps:
    ///
    /// 1. Verify the token's signature and expiry
    /// 2. Load the user by the token subject
    /// 3. Reject tokens whose version lags the stored one
    /// 4. Verify the old password
    /// 5. Hash and store the new password, bumping the version
    ///
    /// Every rejection in steps 1-4 is the same `Unauthorized`; the
    /// specific reason is only logged. The version bump in step 5 is
    /// guarded by the version seen in step 3, so two changes made with the
    /// same token cannot both succeed.
    pub async fn update_password(
        &self,
        bearer_token: Option<&str>,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        // Step 1: Verify token
        let Some(token) = bearer_token else {
            return Err(reject("missing bearer token"));
        };

        let claims = match self.tokens.verify(token) {
            Ok(claims) => claims,
            Err(TokenError::Expired) => return Err(reject("token expired")),
            Err(TokenError::Invalid(e)) => {
                warn!(error = %e, "Invalid bearer token presented");
                return Err(reject("token invalid"));
            }
        };

        // Step 2: Load user
        let Some(user) = self.store.find_by_id(claims.user_id()).await? else {
            return Err(reject("unknown subject"));
        };

        // Step 3: Compare versions
        if !user.accepts_token_version(claims.token_version) {
            debug!(
                user_id = %user.id,
                token_version = claims.token_version,
                current_version = user.token_version,
                "Stale token presented"
            );
            return Err(reject("stale token"));
        }

        // Step 4: Verify old password
        if old_password.is_empty() {
            return Err(AppError::validation(MISSING_PASSWORDS_MESSAGE));
        }
        if !self.hasher.verify_password(old_password, &user.password_hash) {
            debug!(user_id = %user.id, "Old password mismatch");
            return Err(reject("wrong old password"));
        }

        // Step 5: Hash and store
        if new_password.is_empty() {
            return Err(AppError::validation(MISSING_PASSWORDS_MESSAGE));
        }
        let new_hash = self.hasher.hash_password(new_password)?;

        let new_version = self
            .store
            .compare_and_update_password(user.id, claims.token_version, &new_hash)
            .await?
            .ok_or_else(|| reject("token superseded during update"))?;

        info!(user_id = %user.id, token_version = new_version, "Password changed");
        Ok(())
    }
}

/// Logs why an update-password attempt was refused and returns the
/// generic error the client sees.
fn reject(reason: &'static str) -> AppError {
    debug!(reason, "Password change rejected");
    AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE)
}
