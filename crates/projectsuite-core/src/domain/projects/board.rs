//! Kanban and timeline projections of the visible project list

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Project, ProjectId, ProjectStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumn {
    pub status: ProjectStatus,
    pub label: String,
    pub projects: Vec<Project>,
}

impl KanbanColumn {
    pub fn count(&self) -> usize {
        self.projects.len()
    }
}

/// Visible projects grouped by status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
}

impl KanbanBoard {
    /// Group `visible` into one column per status, in board order
    ///
    /// Each column keeps the order of `visible`.
    pub fn from_visible(visible: &[Project]) -> Self {
        let columns = ProjectStatus::BOARD_ORDER
            .iter()
            .map(|status| KanbanColumn {
                status: *status,
                label: status.label().to_string(),
                projects: visible
                    .iter()
                    .filter(|p| p.status == *status)
                    .cloned()
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, status: ProjectStatus) -> Option<&KanbanColumn> {
        self.columns.iter().find(|c| c.status == status)
    }
}

/// One row of the timeline view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: ProjectId,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub progress: u32,
}

impl From<&Project> for TimelineEntry {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            status: project.status,
            progress: project.progress,
        }
    }
}

pub fn timeline(visible: &[Project]) -> Vec<TimelineEntry> {
    visible.iter().map(TimelineEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::seed;

    #[test]
    fn test_board_columns_in_fixed_order() {
        let board = KanbanBoard::from_visible(&seed::demo_projects());
        let labels: Vec<&str> = board.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Planning", "Active", "On hold", "Completed"]);
        assert!(board.columns.iter().all(|c| c.count() == 1));
    }

    #[test]
    fn test_empty_columns_are_kept() {
        let board = KanbanBoard::from_visible(&[]);
        assert_eq!(board.columns.len(), 4);
        assert_eq!(board.column(ProjectStatus::Active).map(KanbanColumn::count), Some(0));
    }

    #[test]
    fn test_column_keeps_visible_order() {
        let mut projects = seed::demo_projects();
        for p in &mut projects {
            p.status = ProjectStatus::Active;
        }
        projects.reverse();
        let board = KanbanBoard::from_visible(&projects);
        let ids: Vec<u64> = board
            .column(ProjectStatus::Active)
            .unwrap()
            .projects
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_timeline_entries() {
        let entries = timeline(&seed::demo_projects());
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].title, "Cloud Infrastructure Migration");
        assert_eq!(entries[2].progress, 100);
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["startDate"], "2024-09-28");
    }
}
