//! Domain layer
//!
//! Project entities, the filter pipeline, domain events and notifications.

pub mod events;
pub mod notifications;
pub mod projects;
pub mod specification;
