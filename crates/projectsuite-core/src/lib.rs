//! Project Suite Core Library
//!
//! This crate provides the core functionality for Project Suite, including:
//! - Project store with create, star, archive and progress commands
//! - Query engine (filter, search, sort) and dashboard analytics
//! - Kanban and timeline projections
//! - Domain events and the notification feed
//! - JSON export document
//! - TOML configuration

pub mod application;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SharedClock, SystemClock};
    pub use crate::config::Config;
    pub use crate::domain::projects::{
        Analytics, FilterCriteria, NewProject, Project, ProjectCategory, ProjectId,
        ProjectPriority, ProjectService, ProjectStatus, ViewType,
    };
    pub use crate::error::{Error, Result};
    pub use crate::storage::ExportDocument;
}

#[cfg(test)]
mod config_tests;
