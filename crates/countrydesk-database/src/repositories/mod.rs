//! Repository implementations for CountryDesk entities.

pub mod country;
pub mod user;

pub use country::CountryRepository;
pub use user::UserRepository;
