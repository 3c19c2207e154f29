//! Registration, sign-in, and password-change workflows.

pub mod service;

pub use service::{
    AuthService, DUPLICATE_LOGIN_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
    INVALID_SIGN_IN_MESSAGE, MISSING_CREDENTIALS_MESSAGE, MISSING_PASSWORDS_MESSAGE,
};
