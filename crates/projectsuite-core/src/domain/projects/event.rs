//! Project domain events
//!
//! One event per successful command. Each event also carries the toast text
//! shown to the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::events::DomainEvent;

use super::entity::{Project, ProjectId};

/// Type of project event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectEventType {
    /// A project was created
    ProjectCreated,
    /// The starred flag was flipped
    StarChanged,
    /// The archived flag was flipped
    ArchiveChanged,
    /// Progress was set
    ProgressUpdated,
}

impl ProjectEventType {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::StarChanged => "star_changed",
            Self::ArchiveChanged => "archive_changed",
            Self::ProgressUpdated => "progress_updated",
        }
    }
}

impl std::fmt::Display for ProjectEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A project domain event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEvent {
    /// Unique event identifier
    pub id: Uuid,
    pub project_id: ProjectId,
    /// Title at the time of the event
    pub project_title: String,
    pub event_type: ProjectEventType,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl ProjectEvent {
    pub fn new(
        project: &Project,
        event_type: ProjectEventType,
        data: Option<serde_json::Value>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id: project.id,
            project_title: project.title.clone(),
            event_type,
            data,
            created_at,
        }
    }

    pub fn created(project: &Project, at: DateTime<Utc>) -> Self {
        let data = serde_json::json!({
            "status": project.status,
            "category": project.category,
        });
        Self::new(project, ProjectEventType::ProjectCreated, Some(data), at)
    }

    pub fn star_changed(project: &Project, at: DateTime<Utc>) -> Self {
        let data = serde_json::json!({ "starred": project.starred });
        Self::new(project, ProjectEventType::StarChanged, Some(data), at)
    }

    pub fn archive_changed(project: &Project, at: DateTime<Utc>) -> Self {
        let data = serde_json::json!({ "archived": project.archived });
        Self::new(project, ProjectEventType::ArchiveChanged, Some(data), at)
    }

    pub fn progress_updated(project: &Project, previous: u32, at: DateTime<Utc>) -> Self {
        let data = serde_json::json!({
            "previous": previous,
            "progress": project.progress,
        });
        Self::new(project, ProjectEventType::ProgressUpdated, Some(data), at)
    }

    fn flag(&self, key: &str) -> bool {
        self.data
            .as_ref()
            .and_then(|d| d.get(key))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    fn progress(&self) -> u64 {
        self.data
            .as_ref()
            .and_then(|d| d.get("progress"))
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0)
    }

    /// Toast title
    pub fn headline(&self) -> &'static str {
        match self.event_type {
            ProjectEventType::ProjectCreated => "Project created",
            ProjectEventType::StarChanged => "Project updated",
            ProjectEventType::ArchiveChanged if self.flag("archived") => "Project archived",
            ProjectEventType::ArchiveChanged => "Project restored",
            ProjectEventType::ProgressUpdated => "Progress updated",
        }
    }

    /// Toast description
    pub fn message(&self) -> String {
        match self.event_type {
            ProjectEventType::ProjectCreated => {
                format!("{} has been created successfully.", self.project_title)
            }
            ProjectEventType::StarChanged => {
                "Project starred status updated successfully.".to_string()
            }
            ProjectEventType::ArchiveChanged if self.flag("archived") => {
                "Project has been moved to archive.".to_string()
            }
            ProjectEventType::ArchiveChanged => {
                "Project has been restored from archive.".to_string()
            }
            ProjectEventType::ProgressUpdated => {
                format!("{} is now {}% complete.", self.project_title, self.progress())
            }
        }
    }
}

impl DomainEvent for ProjectEvent {
    fn event_type(&self) -> &str {
        self.event_type.as_str()
    }

    fn aggregate_id(&self) -> u64 {
        self.project_id.value()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }
}
