//! Project query engine
//!
//! Produces the visible project list (filtered, searched and sorted) and the
//! analytics snapshot from a borrowed view of the collection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clock::SharedClock;

use super::analytics::Analytics;
use super::criteria::FilterCriteria;
use super::entity::{Project, ViewType};
use super::specification::ProjectSpecBuilder;

/// Visible projects plus analytics for the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub projects: Vec<Project>,
    pub analytics: Analytics,
}

/// Display order: starred first, then most recent activity first
///
/// Used with a stable sort so remaining ties keep collection order.
pub fn display_order(a: &Project, b: &Project) -> Ordering {
    b.starred
        .cmp(&a.starred)
        .then_with(|| b.last_activity.cmp(&a.last_activity))
}

pub struct ProjectQueryEngine {
    clock: SharedClock,
}

impl ProjectQueryEngine {
    pub fn new(clock: SharedClock) -> Self {
        Self { clock }
    }

    /// Projects to display for the given criteria, search text and view
    pub fn visible(
        &self,
        projects: &[Project],
        criteria: &FilterCriteria,
        search: &str,
        view: ViewType,
    ) -> Vec<Project> {
        let builder = ProjectSpecBuilder::from_query(criteria, search, view);
        let mut visible: Vec<Project> = builder.filter(projects).into_iter().cloned().collect();
        visible.sort_by(display_order);
        tracing::debug!(
            total = projects.len(),
            visible = visible.len(),
            view = %view,
            "Filtered projects"
        );
        visible
    }

    /// Analytics over the entire collection, as of the clock's today
    pub fn analytics(&self, projects: &[Project]) -> Analytics {
        Analytics::compute(projects, self.clock.today())
    }

    pub fn query(
        &self,
        projects: &[Project],
        criteria: &FilterCriteria,
        search: &str,
        view: ViewType,
    ) -> QueryResult {
        QueryResult {
            projects: self.visible(projects, criteria, search, view),
            analytics: self.analytics(projects),
        }
    }
}
