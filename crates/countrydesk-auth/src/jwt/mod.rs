//! Signed, expiring, version-stamped session tokens.
//!
//! A token is self-contained: signature and expiry checks need no store
//! lookup. Comparing the embedded token version with the user's current
//! one is left to the caller, since that does need the store.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod service;

pub use claims::{Claims, Subject};
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
pub use error::TokenError;
pub use service::TokenService;
