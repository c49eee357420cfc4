//! Application validators
//!
//! Input validation for application operations.

pub mod project_validator;

pub use project_validator::{ProjectValidator, ValidatedProject};
