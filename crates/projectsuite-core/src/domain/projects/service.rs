//! Project service
//!
//! Facade over the store and the query engine. Every successful command is
//! recorded in the event log and announced in the notification feed.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::clock::SharedClock;
use crate::domain::events::EventLog;
use crate::domain::notifications::{Notification, NotificationFeed};
use crate::error::{Error, Result};
use crate::storage::export::ExportDocument;

use super::analytics::Analytics;
use super::board::{self, KanbanBoard, TimelineEntry};
use super::criteria::FilterCriteria;
use super::entity::{NewProject, Project, ProjectId, ViewType};
use super::event::ProjectEvent;
use super::query::{ProjectQueryEngine, QueryResult};
use super::seed;
use super::store::ProjectStore;

/// Analytics plus the most recent notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub analytics: Analytics,
    pub notifications: Vec<Notification>,
}

pub struct ProjectService {
    store: ProjectStore,
    engine: ProjectQueryEngine,
    events: EventLog,
    notifications: NotificationFeed,
    clock: SharedClock,
}

impl ProjectService {
    /// Service over an empty collection
    pub fn new(clock: SharedClock) -> Self {
        Self::with_projects(clock, Vec::new())
    }

    /// Service over existing projects with an empty feed
    pub fn with_projects(clock: SharedClock, projects: Vec<Project>) -> Self {
        Self {
            store: ProjectStore::with_projects(clock.clone(), projects),
            engine: ProjectQueryEngine::new(clock.clone()),
            events: EventLog::new(),
            notifications: NotificationFeed::new(),
            clock,
        }
    }

    /// Service over the demo projects and notifications
    pub fn seeded(clock: SharedClock) -> Self {
        let mut service = Self::with_projects(clock, seed::demo_projects());
        service.notifications = NotificationFeed::with_notifications(seed::demo_notifications());
        service
    }

    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.store.get(id)
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Event log, oldest first
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    pub fn create_project(&mut self, input: &NewProject) -> Result<ProjectEvent> {
        let now = self.clock.now();
        let event = match self.store.create(input) {
            Ok(project) => ProjectEvent::created(project, now),
            Err(e) => {
                warn!(title = %input.title, error = %e, "Project creation rejected");
                return Err(e);
            }
        };
        Ok(self.publish(event))
    }

    pub fn toggle_star(&mut self, id: ProjectId) -> Result<ProjectEvent> {
        let now = self.clock.now();
        let event = match self.store.toggle_star(id) {
            Ok(project) => ProjectEvent::star_changed(project, now),
            Err(e) => {
                warn!(project_id = %id, error = %e, "Star toggle failed");
                return Err(e);
            }
        };
        Ok(self.publish(event))
    }

    pub fn toggle_archive(&mut self, id: ProjectId) -> Result<ProjectEvent> {
        let now = self.clock.now();
        let event = match self.store.toggle_archive(id) {
            Ok(project) => ProjectEvent::archive_changed(project, now),
            Err(e) => {
                warn!(project_id = %id, error = %e, "Archive toggle failed");
                return Err(e);
            }
        };
        Ok(self.publish(event))
    }

    pub fn update_progress(&mut self, id: ProjectId, value: u32) -> Result<ProjectEvent> {
        let now = self.clock.now();
        let previous = match self.store.update_progress(id, value) {
            Ok(previous) => previous,
            Err(e) => {
                warn!(project_id = %id, error = %e, "Progress update failed");
                return Err(e);
            }
        };
        let event = match self.store.get(id) {
            Some(project) => ProjectEvent::progress_updated(project, previous, now),
            None => return Err(Error::ProjectNotFound(id)),
        };
        Ok(self.publish(event))
    }

    pub fn query(&self, criteria: &FilterCriteria, search: &str, view: ViewType) -> QueryResult {
        self.engine
            .query(self.store.projects(), criteria, search, view)
    }

    pub fn analytics(&self) -> Analytics {
        self.engine.analytics(self.store.projects())
    }

    pub fn kanban(&self, criteria: &FilterCriteria, search: &str) -> KanbanBoard {
        let visible = self
            .engine
            .visible(self.store.projects(), criteria, search, ViewType::Kanban);
        KanbanBoard::from_visible(&visible)
    }

    pub fn timeline(&self, criteria: &FilterCriteria, search: &str) -> Vec<TimelineEntry> {
        let visible = self
            .engine
            .visible(self.store.projects(), criteria, search, ViewType::Timeline);
        board::timeline(&visible)
    }

    /// Analytics and the `limit` newest notifications
    pub fn dashboard(&self, limit: usize) -> Dashboard {
        Dashboard {
            analytics: self.analytics(),
            notifications: self.notifications.recent(limit),
        }
    }

    /// Snapshot of the whole collection for export
    pub fn export_document(&mut self) -> ExportDocument {
        let now = self.clock.now();
        let document = ExportDocument::new(self.store.projects().to_vec(), now);
        self.notifications
            .success("Project data has been exported successfully.", now);
        info!(projects = document.projects.len(), "Prepared export");
        document
    }

    fn publish(&mut self, event: ProjectEvent) -> ProjectEvent {
        self.events.append(&event);
        self.notifications.success(event.message(), event.created_at);
        info!(
            project_id = %event.project_id,
            event_type = %event.event_type,
            "{}",
            event.headline()
        );
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use crate::domain::projects::{ProjectEventType, ProjectStatus};
    use chrono::NaiveDate;

    fn service() -> ProjectService {
        ProjectService::seeded(clock::fixed_on(
            NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        ))
    }

    #[test]
    fn test_create_records_event_and_notification() {
        let mut service = service();
        let input = NewProject::new("Brand refresh", "2024-10-01", "2024-11-01", "Marketing");
        let event = service.create_project(&input).unwrap();

        assert_eq!(event.event_type, ProjectEventType::ProjectCreated);
        assert_eq!(service.projects().len(), 5);
        assert_eq!(service.events().len(), 1);
        assert_eq!(
            service.notifications().recent(1)[0].message,
            "Brand refresh has been created successfully."
        );
        assert_eq!(service.get(event.project_id).unwrap().status, ProjectStatus::Active);
    }

    #[test]
    fn test_failed_command_records_nothing() {
        let mut service = service();
        let before = service.notifications().len();
        let err = service.toggle_star(ProjectId(42)).unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound(_)));
        assert!(service.events().is_empty());
        assert_eq!(service.notifications().len(), before);

        let err = service
            .create_project(&NewProject::new("X", "2024-10-01", "2024-11-01", ""))
            .unwrap_err();
        assert!(err.to_string().contains("missing category"));
        assert_eq!(service.projects().len(), 4);
    }

    #[test]
    fn test_progress_event_reports_new_value() {
        let mut service = service();
        let event = service.update_progress(ProjectId(2), 40).unwrap();
        assert_eq!(event.message(), "Cross-Platform Mobile Suite is now 40% complete.");
        assert_eq!(service.events().for_aggregate(2).count(), 1);
    }

    #[test]
    fn test_archive_hides_from_kanban_and_timeline() {
        let mut service = service();
        service.toggle_archive(ProjectId(1)).unwrap();

        let board = service.kanban(&FilterCriteria::all(), "");
        assert_eq!(board.column(ProjectStatus::Active).unwrap().count(), 0);
        assert_eq!(service.timeline(&FilterCriteria::all(), "").len(), 3);

        let archive = service.query(&FilterCriteria::all(), "", ViewType::Archive);
        assert_eq!(archive.projects.len(), 4);
        assert_eq!(archive.analytics.active_projects, 0);
    }

    #[test]
    fn test_dashboard_lists_newest_first() {
        let mut service = service();
        service.toggle_star(ProjectId(3)).unwrap();
        let dashboard = service.dashboard(2);
        assert_eq!(dashboard.notifications.len(), 2);
        assert_eq!(
            dashboard.notifications[0].message,
            "Project starred status updated successfully."
        );
        assert_eq!(
            dashboard.notifications[1].message,
            "Website Redesign milestone reached - 65% complete"
        );
        assert_eq!(dashboard.analytics.avg_progress, 46);
    }

    #[test]
    fn test_export_document_adds_notification() {
        let mut service = service();
        let document = service.export_document();
        assert_eq!(document.projects.len(), 4);
        assert_eq!(document.version, "2.0");
        assert_eq!(
            service.notifications().recent(1)[0].message,
            "Project data has been exported successfully."
        );
    }
}
