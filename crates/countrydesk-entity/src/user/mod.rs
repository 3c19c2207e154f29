//! User domain entities.

pub mod model;

pub use model::{INITIAL_TOKEN_VERSION, User};
