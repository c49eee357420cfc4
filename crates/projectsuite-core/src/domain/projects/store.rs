//! Project store
//!
//! Owns the authoritative project list and applies the mutating commands.
//! Records are never removed; archiving is a soft flag.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::application::validators::ProjectValidator;
use crate::clock::SharedClock;
use crate::error::{Error, Result};

use super::entity::{NewProject, Project, ProjectId, ProjectStatus};
use super::seed;

pub struct ProjectStore {
    projects: Vec<Project>,
    clock: SharedClock,
    last_assigned: u64,
}

impl ProjectStore {
    /// Empty store
    pub fn new(clock: SharedClock) -> Self {
        Self::with_projects(clock, Vec::new())
    }

    /// Store holding existing projects, in the given order
    pub fn with_projects(clock: SharedClock, projects: Vec<Project>) -> Self {
        let last_assigned = projects.iter().map(|p| p.id.value()).max().unwrap_or(0);
        Self {
            projects,
            clock,
            last_assigned,
        }
    }

    /// Store holding the demo data set
    pub fn seeded(clock: SharedClock) -> Self {
        Self::with_projects(clock, seed::demo_projects())
    }

    /// All projects in collection order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Validate the input and append a new project
    ///
    /// Starts in planning when the start date is after today, active
    /// otherwise. Counters start at zero and last activity is today.
    pub fn create(&mut self, input: &NewProject) -> Result<&Project> {
        let validated = ProjectValidator::validate_new_project(input)?;
        let today = self.clock.today();
        let id = self.next_id();

        let status = if validated.start_date > today {
            ProjectStatus::Planning
        } else {
            ProjectStatus::Active
        };

        let project = Project {
            id,
            title: validated.title,
            description: validated.description,
            status,
            priority: validated.priority,
            start_date: validated.start_date,
            end_date: validated.end_date,
            progress: 0,
            category: validated.category,
            team_members: validated.team_members,
            budget: validated.budget,
            spent: 0.0,
            tasks: 0,
            completed_tasks: 0,
            tags: Vec::new(),
            last_activity: today,
            starred: false,
            archived: false,
        };

        info!(
            project_id = %id,
            title = %project.title,
            status = %project.status,
            "Created project"
        );
        self.projects.push(project);
        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Flip the starred flag
    pub fn toggle_star(&mut self, id: ProjectId) -> Result<&Project> {
        let project = self.find_mut(id)?;
        project.starred = !project.starred;
        debug!(project_id = %id, starred = project.starred, "Toggled star");
        Ok(project)
    }

    /// Flip the archived flag
    pub fn toggle_archive(&mut self, id: ProjectId) -> Result<&Project> {
        let project = self.find_mut(id)?;
        project.archived = !project.archived;
        debug!(project_id = %id, archived = project.archived, "Toggled archive");
        Ok(project)
    }

    /// Set progress without range checking; returns the previous value
    pub fn update_progress(&mut self, id: ProjectId, value: u32) -> Result<u32> {
        let project = self.find_mut(id)?;
        let previous = project.progress;
        project.progress = value;
        debug!(project_id = %id, previous, progress = value, "Updated progress");
        Ok(previous)
    }

    fn find_mut(&mut self, id: ProjectId) -> Result<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::ProjectNotFound(id))
    }

    /// Millisecond timestamp, bumped past the last id when the clock has
    /// not moved on
    fn next_id(&mut self) -> ProjectId {
        let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let id = match self.last_assigned.checked_add(1) {
            Some(next) => millis.max(next),
            None => self.free_id_from(millis),
        };
        self.last_assigned = self.last_assigned.max(id);
        ProjectId(id)
    }

    /// First id at or after `start` that no project holds, wrapping to 1
    fn free_id_from(&self, start: u64) -> u64 {
        let taken: HashSet<u64> = self.projects.iter().map(|p| p.id.value()).collect();
        let mut candidate = start.max(1);
        while taken.contains(&candidate) {
            candidate = candidate.checked_add(1).unwrap_or(1);
        }
        warn!(id = candidate, "Project id space exhausted, reusing a free slot");
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use crate::domain::projects::ProjectCategory;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    fn store() -> ProjectStore {
        ProjectStore::seeded(clock::fixed_on(today()))
    }

    #[test]
    fn test_create_future_start_is_planning() {
        let mut store = store();
        let input = NewProject::new("Docs portal", "2024-12-01", "2025-03-01", "Development")
            .with_budget(9000.0);
        let project = store.create(&input).unwrap().clone();

        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.progress, 0);
        assert_eq!(project.spent, 0.0);
        assert_eq!(project.tasks, 0);
        assert!(project.tags.is_empty());
        assert_eq!(project.last_activity, today());
        assert_eq!(project.category, ProjectCategory::Development);
        assert!(!project.starred && !project.archived);
        assert_eq!(store.len(), 5);
        assert_eq!(store.projects()[4].id, project.id);
    }

    #[test]
    fn test_create_today_or_past_start_is_active() {
        let mut store = store();
        let today_start = NewProject::new("A", "2024-10-01", "2024-12-01", "Design");
        assert_eq!(store.create(&today_start).unwrap().status, ProjectStatus::Active);
        let past_start = NewProject::new("B", "2024-01-01", "2024-12-01", "Design");
        assert_eq!(store.create(&past_start).unwrap().status, ProjectStatus::Active);
    }

    #[test]
    fn test_create_rejects_empty_title_without_change() {
        let mut store = store();
        let before = store.projects().to_vec();
        let err = store
            .create(&NewProject::new("", "2024-10-01", "2024-12-01", "Design"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "title"));
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn test_ids_are_unique_under_frozen_clock() {
        let mut store = ProjectStore::new(clock::fixed_on(today()));
        let input = NewProject::new("Same", "2024-10-01", "2024-12-01", "Research");
        let a = store.create(&input).unwrap().id;
        let b = store.create(&input).unwrap().id;
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_ids_never_collide_with_existing() {
        let mut projects = seed::demo_projects();
        projects[0].id = ProjectId(u64::MAX / 2);
        let mut store = ProjectStore::with_projects(clock::fixed_on(today()), projects);
        let id = store
            .create(&NewProject::new("X", "2024-10-01", "2024-12-01", "Research"))
            .unwrap()
            .id;
        assert_eq!(id, ProjectId(u64::MAX / 2 + 1));
    }

    #[test]
    fn test_ids_stay_unique_after_max_id() {
        let mut projects = seed::demo_projects();
        projects[0].id = ProjectId(u64::MAX);
        let mut store = ProjectStore::with_projects(clock::fixed_on(today()), projects);
        let input = NewProject::new("Y", "2024-10-01", "2024-12-01", "Research");

        let a = store.create(&input).unwrap().id;
        let b = store.create(&input).unwrap().id;

        let ids: HashSet<ProjectId> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), store.len());
        assert_ne!(a, ProjectId(u64::MAX));
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_star_twice_restores_record() {
        let mut store = store();
        let original = store.get(ProjectId(2)).unwrap().clone();
        assert!(store.toggle_star(ProjectId(2)).unwrap().starred);
        assert!(!store.toggle_star(ProjectId(2)).unwrap().starred);
        assert_eq!(store.get(ProjectId(2)).unwrap(), &original);
    }

    #[test]
    fn test_toggle_archive_flips_flag_only() {
        let mut store = store();
        let project = store.toggle_archive(ProjectId(3)).unwrap().clone();
        assert!(project.archived);
        assert_eq!(project.status, ProjectStatus::Completed);
        assert!(!store.toggle_archive(ProjectId(3)).unwrap().archived);
    }

    #[test]
    fn test_update_progress_is_unchecked() {
        let mut store = store();
        assert_eq!(store.update_progress(ProjectId(1), 150).unwrap(), 65);
        assert_eq!(store.get(ProjectId(1)).unwrap().progress, 150);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = store();
        let missing = ProjectId(999);
        assert!(matches!(store.toggle_star(missing), Err(Error::ProjectNotFound(id)) if id == missing));
        assert!(matches!(store.toggle_archive(missing), Err(Error::ProjectNotFound(_))));
        assert!(matches!(store.update_progress(missing, 10), Err(Error::ProjectNotFound(_))));
        assert_eq!(store.len(), 4);
    }
}
