//! Project specifications
//!
//! Composable specifications for filtering the project list. The builder
//! applies them in a fixed order and stops at the first failure.

use crate::domain::specification::{Not, Specification};

use super::criteria::{FilterCriteria, Selector};
use super::entity::{Project, ProjectCategory, ProjectPriority, ProjectStatus, ViewType};

/// Satisfied by archived projects
pub struct ArchivedSpec;

impl Specification<Project> for ArchivedSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.archived
    }
}

/// Satisfied by projects whose status passes the selector
pub struct StatusSpec(pub Selector<ProjectStatus>);

impl Specification<Project> for StatusSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        self.0.matches(&project.status)
    }
}

/// Satisfied by projects whose priority passes the selector
pub struct PrioritySpec(pub Selector<ProjectPriority>);

impl Specification<Project> for PrioritySpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        self.0.matches(&project.priority)
    }
}

/// Satisfied by projects whose category passes the selector
pub struct CategorySpec(pub Selector<ProjectCategory>);

impl Specification<Project> for CategorySpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        self.0.matches(&project.category)
    }
}

/// Title contains the (lowercased) needle
pub struct TitleContainsSpec {
    needle: String,
}

impl Specification<Project> for TitleContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.title.to_lowercase().contains(&self.needle)
    }
}

/// Description contains the (lowercased) needle
pub struct DescriptionContainsSpec {
    needle: String,
}

impl Specification<Project> for DescriptionContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.description.to_lowercase().contains(&self.needle)
    }
}

/// Some tag contains the (lowercased) needle
pub struct TagContainsSpec {
    needle: String,
}

impl Specification<Project> for TagContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}

/// Some team member name contains the (lowercased) needle
pub struct MemberContainsSpec {
    needle: String,
}

impl Specification<Project> for MemberContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project
            .team_members
            .iter()
            .any(|member| member.to_lowercase().contains(&self.needle))
    }
}

/// Free-text search across title, description, tags and team members
pub struct SearchTextSpec {
    inner: Box<dyn Specification<Project>>,
}

impl SearchTextSpec {
    /// Build a search over the four text fields; matching is case-insensitive
    pub fn new(query: &str) -> Self {
        let needle = query.to_lowercase();
        let inner = TitleContainsSpec {
            needle: needle.clone(),
        }
        .or(DescriptionContainsSpec {
            needle: needle.clone(),
        })
        .or(TagContainsSpec {
            needle: needle.clone(),
        })
        .or(MemberContainsSpec { needle });
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Specification<Project> for SearchTextSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        self.inner.is_satisfied_by(project)
    }
}

type Stage<'a> = &'a dyn Specification<Project>;

/// Builder for composing the project filter pipeline
#[derive(Default)]
pub struct ProjectSpecBuilder {
    visibility_spec: Option<Not<ArchivedSpec>>,
    status_spec: Option<StatusSpec>,
    priority_spec: Option<PrioritySpec>,
    category_spec: Option<CategorySpec>,
    search_spec: Option<SearchTextSpec>,
}

impl ProjectSpecBuilder {
    /// Create a builder that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for a criteria/search/view combination
    pub fn from_query(criteria: &FilterCriteria, search: &str, view: ViewType) -> Self {
        let mut builder = Self::new();
        if !view.shows_archived() {
            builder = builder.hide_archived();
        }
        // date_range is carried on the criteria but never applied
        builder
            .with_status(criteria.status)
            .with_priority(criteria.priority)
            .with_category(criteria.category)
            .with_search(search)
    }

    /// Exclude archived projects
    pub fn hide_archived(mut self) -> Self {
        self.visibility_spec = Some(ArchivedSpec.not());
        self
    }

    /// Filter on status; the `all` selector adds nothing
    pub fn with_status(mut self, status: Selector<ProjectStatus>) -> Self {
        self.status_spec = (!status.is_all()).then_some(StatusSpec(status));
        self
    }

    pub fn with_priority(mut self, priority: Selector<ProjectPriority>) -> Self {
        self.priority_spec = (!priority.is_all()).then_some(PrioritySpec(priority));
        self
    }

    pub fn with_category(mut self, category: Selector<ProjectCategory>) -> Self {
        self.category_spec = (!category.is_all()).then_some(CategorySpec(category));
        self
    }

    /// Add a free-text search; an empty query adds nothing
    pub fn with_search(mut self, query: &str) -> Self {
        self.search_spec = if query.is_empty() {
            None
        } else {
            Some(SearchTextSpec::new(query))
        };
        self
    }

    /// Check if a project satisfies all specifications
    pub fn is_satisfied_by(&self, project: &Project) -> bool {
        let stages: [Option<Stage<'_>>; 5] = [
            self.visibility_spec.as_ref().map(|s| s as Stage<'_>),
            self.status_spec.as_ref().map(|s| s as Stage<'_>),
            self.priority_spec.as_ref().map(|s| s as Stage<'_>),
            self.category_spec.as_ref().map(|s| s as Stage<'_>),
            self.search_spec.as_ref().map(|s| s as Stage<'_>),
        ];
        stages
            .into_iter()
            .flatten()
            .all(|spec| spec.is_satisfied_by(project))
    }

    /// Keep the projects that satisfy all specifications, in order
    pub fn filter<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| self.is_satisfied_by(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::seed;
    use crate::domain::projects::DateRange;

    fn ids(projects: &[&Project]) -> Vec<u64> {
        projects.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_search_matches_each_field() {
        let projects = seed::demo_projects();
        let by_title = SearchTextSpec::new("MOBILE");
        assert!(by_title.is_satisfied_by(&projects[1]));

        let by_description = SearchTextSpec::new("competitor");
        assert!(by_description.is_satisfied_by(&projects[3]));

        let by_tag = SearchTextSpec::new("revenue-critical");
        assert!(by_tag.is_satisfied_by(&projects[0]));

        let by_member = SearchTextSpec::new("grace");
        assert!(by_member.is_satisfied_by(&projects[2]));
        assert!(!by_member.is_satisfied_by(&projects[0]));
    }

    #[test]
    fn test_empty_search_passes_everything() {
        let projects = seed::demo_projects();
        let builder = ProjectSpecBuilder::new().with_search("");
        assert_eq!(builder.filter(&projects).len(), projects.len());
    }

    #[test]
    fn test_archived_hidden_outside_archive_view() {
        let mut projects = seed::demo_projects();
        projects[0].archived = true;

        let normal = ProjectSpecBuilder::from_query(&FilterCriteria::all(), "", ViewType::Projects);
        assert_eq!(ids(&normal.filter(&projects)), vec![2, 3, 4]);

        let archive = ProjectSpecBuilder::from_query(&FilterCriteria::all(), "", ViewType::Archive);
        assert_eq!(ids(&archive.filter(&projects)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let projects = seed::demo_projects();
        let criteria = FilterCriteria::all()
            .with_priority(ProjectPriority::High)
            .with_category(ProjectCategory::Infrastructure);
        let builder = ProjectSpecBuilder::from_query(&criteria, "", ViewType::Projects);
        assert_eq!(ids(&builder.filter(&projects)), vec![3]);

        let criteria = criteria.with_status(ProjectStatus::Active);
        let builder = ProjectSpecBuilder::from_query(&criteria, "", ViewType::Projects);
        assert!(builder.filter(&projects).is_empty());
    }

    #[test]
    fn test_all_selectors_add_no_stage() {
        let projects = seed::demo_projects();
        let builder = ProjectSpecBuilder::new()
            .with_status(Selector::All)
            .with_priority(Selector::All)
            .with_category(Selector::All);
        assert_eq!(ids(&builder.filter(&projects)), vec![1, 2, 3, 4]);

        let builder = builder.with_priority(Selector::Only(ProjectPriority::Low));
        assert_eq!(ids(&builder.filter(&projects)), vec![4]);
    }

    #[test]
    fn test_date_range_leaves_visible_set_unchanged() {
        let projects = seed::demo_projects();
        let baseline = ProjectSpecBuilder::from_query(&FilterCriteria::all(), "", ViewType::Projects);
        for range in [DateRange::Week, DateRange::Month, DateRange::Quarter] {
            let criteria = FilterCriteria::all().with_date_range(range);
            let builder = ProjectSpecBuilder::from_query(&criteria, "", ViewType::Projects);
            assert_eq!(
                ids(&builder.filter(&projects)),
                ids(&baseline.filter(&projects)),
                "{range:?}"
            );
        }
    }

    #[test]
    fn test_search_is_anded_with_criteria() {
        let projects = seed::demo_projects();
        let criteria = FilterCriteria::all().with_status(ProjectStatus::OnHold);
        let builder = ProjectSpecBuilder::from_query(&criteria, "ai", ViewType::Projects);
        assert_eq!(ids(&builder.filter(&projects)), vec![4]);
    }
}
