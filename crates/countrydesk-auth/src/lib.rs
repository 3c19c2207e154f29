//! # countrydesk-auth
//!
//! Authentication primitives for CountryDesk.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: issuing and verifying signed, expiring, version-stamped tokens
//! - `store`: the user record store used by the auth workflows, with
//!   PostgreSQL and in-memory implementations

pub mod jwt;
pub mod password;
pub mod store;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, Subject, TokenError, TokenService};
pub use password::PasswordHasher;
pub use store::{MemoryUserStore, UserStore};
