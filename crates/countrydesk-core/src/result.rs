//! Convenience result type alias for CountryDesk.

use crate::error::AppError;

/// A specialized `Result` type for CountryDesk operations.
pub type AppResult<T> = Result<T, AppError>;
