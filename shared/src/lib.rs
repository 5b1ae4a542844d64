//! Calorie Estimator Shared Library
//!
//! The estimator itself, the calculator form state, and the types used by
//! the backend, CLI and WASM crates.

pub mod errors;
pub mod estimator;
pub mod form;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use estimator::*;
pub use form::CalorieForm;
pub use types::*;
