//! Aggregate metrics over the whole project collection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Project, ProjectStatus};

/// Dashboard metrics, recomputed on every query and never stored
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Active and not archived
    pub active_projects: usize,
    /// Completed, archived or not
    pub completed_projects: usize,
    pub total_budget: f64,
    pub total_spent: f64,
    /// Percent of the total budget spent
    pub budget_utilization: f64,
    /// Mean progress, rounded to the nearest integer
    pub avg_progress: u32,
    pub overdue_projects: usize,
    /// Percent of completed projects not offset by overdue ones; may be negative
    pub on_time_completion: f64,
}

impl Analytics {
    /// Compute the metrics for `projects` as of `today`
    ///
    /// Archived projects count everywhere except `active_projects`.
    pub fn compute(projects: &[Project], today: NaiveDate) -> Self {
        let active_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active && !p.archived)
            .count();
        let completed_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count();
        let total_budget: f64 = projects.iter().map(|p| p.budget).sum();
        let total_spent: f64 = projects.iter().map(|p| p.spent).sum();
        let overdue_projects = projects.iter().filter(|p| p.is_overdue(today)).count();

        let budget_utilization = if total_budget != 0.0 {
            (total_spent / total_budget) * 100.0
        } else {
            0.0
        };

        let avg_progress = if projects.is_empty() {
            0
        } else {
            let sum: f64 = projects.iter().map(|p| f64::from(p.progress)).sum();
            (sum / projects.len() as f64).round() as u32
        };

        let on_time_completion = if completed_projects > 0 {
            let completed = completed_projects as f64;
            ((completed - overdue_projects as f64) / completed) * 100.0
        } else {
            0.0
        };

        Self {
            active_projects,
            completed_projects,
            total_budget,
            total_spent,
            budget_utilization,
            avg_progress,
            overdue_projects,
            on_time_completion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::seed;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_analytics() {
        let a = Analytics::compute(&seed::demo_projects(), day(2024, 10, 1));
        assert_eq!(a.active_projects, 1);
        assert_eq!(a.completed_projects, 1);
        assert_eq!(a.total_budget, 190_000.0);
        assert_eq!(a.total_spent, 79_550.0);
        assert!((a.budget_utilization - 41.868_421).abs() < 1e-4);
        assert_eq!(a.avg_progress, 46);
        assert_eq!(a.overdue_projects, 0);
        assert_eq!(a.on_time_completion, 100.0);
    }

    #[test]
    fn test_on_time_completion_can_go_negative() {
        let a = Analytics::compute(&seed::demo_projects(), day(2025, 1, 10));
        assert_eq!(a.overdue_projects, 2);
        assert_eq!(a.on_time_completion, -100.0);
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let a = Analytics::compute(&[], day(2024, 10, 1));
        assert_eq!(a, Analytics::default());
    }

    #[test]
    fn test_zero_budget_guard() {
        let projects: Vec<Project> = seed::demo_projects()
            .into_iter()
            .map(|p| Project {
                budget: 0.0,
                ..p
            })
            .collect();
        let a = Analytics::compute(&projects, day(2024, 10, 1));
        assert_eq!(a.total_budget, 0.0);
        assert_eq!(a.budget_utilization, 0.0);
    }

    #[test]
    fn test_archived_excluded_only_from_active_count() {
        let mut projects = seed::demo_projects();
        for p in &mut projects {
            p.archived = true;
        }
        let a = Analytics::compute(&projects, day(2024, 10, 1));
        assert_eq!(a.active_projects, 0);
        assert_eq!(a.completed_projects, 1);
        assert_eq!(a.total_budget, 190_000.0);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(Analytics::default()).unwrap();
        for key in [
            "activeProjects",
            "completedProjects",
            "totalBudget",
            "totalSpent",
            "budgetUtilization",
            "avgProgress",
            "overdueProjects",
            "onTimeCompletion",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
