//! Projects domain module
//!
//! # Architecture
//!
//! - **Entities**: `Project`, `NewProject` and the status, priority, category
//!   and view enumerations
//! - **Store**: `ProjectStore` owns the collection and applies commands
//! - **Query**: `ProjectQueryEngine` filters, searches and sorts, and computes
//!   `Analytics` over the whole collection
//! - **Service**: `ProjectService` ties both together with the event log and
//!   the notification feed
//!
//! # Example
//!
//! ```
//! use projectsuite_core::clock;
//! use projectsuite_core::domain::projects::{FilterCriteria, ProjectService, ViewType};
//!
//! let service = ProjectService::seeded(clock::system());
//! let result = service.query(&FilterCriteria::all(), "ai", ViewType::Projects);
//! assert_eq!(result.projects.len(), 2);
//! ```

pub mod analytics;
pub mod board;
pub mod criteria;
pub mod entity;
pub mod event;
pub mod query;
pub mod seed;
pub mod service;
pub mod specification;
pub mod store;

// Re-export main types
pub use analytics::Analytics;
pub use board::{KanbanBoard, KanbanColumn, TimelineEntry};
pub use criteria::{DateRange, FilterCriteria, Selector};
pub use entity::{
    NewProject, Project, ProjectCategory, ProjectId, ProjectPriority, ProjectStatus, ViewType,
};
pub use event::{ProjectEvent, ProjectEventType};
pub use query::{ProjectQueryEngine, QueryResult};
pub use service::{Dashboard, ProjectService};
pub use specification::{
    ArchivedSpec, CategorySpec, PrioritySpec, ProjectSpecBuilder, SearchTextSpec, StatusSpec,
};
pub use store::ProjectStore;
