//! Country reference data.

pub mod model;

pub use model::Country;
