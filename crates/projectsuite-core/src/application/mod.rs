//! Application service layer
//!
//! Input validation that sits in front of the domain operations.

pub mod validators;
