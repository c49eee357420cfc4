//! Project entity and its enumerations

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Process-unique project identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl ProjectId {
    /// Raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ProjectId)
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a valid project id", s)))
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Planning,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// All statuses, in kanban column order
    pub const BOARD_ORDER: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Planning => "planning",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    /// Human-readable label ("On hold")
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On hold",
        }
    }

    /// Parse from the wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(ProjectStatus::Active),
            "planning" => Some(ProjectStatus::Planning),
            "completed" => Some(ProjectStatus::Completed),
            "on-hold" | "on_hold" | "onhold" => Some(ProjectStatus::OnHold),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!(
                "unknown status '{}'. Valid options: active, planning, completed, on-hold",
                s
            ))
        })
    }
}

/// Project priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl ProjectPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPriority::High => "high",
            ProjectPriority::Medium => "medium",
            ProjectPriority::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(ProjectPriority::High),
            "medium" => Some(ProjectPriority::Medium),
            "low" => Some(ProjectPriority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!(
                "unknown priority '{}'. Valid options: high, medium, low",
                s
            ))
        })
    }
}

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Design,
    Development,
    Infrastructure,
    Research,
    Marketing,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Design,
        ProjectCategory::Development,
        ProjectCategory::Infrastructure,
        ProjectCategory::Research,
        ProjectCategory::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Design => "Design",
            ProjectCategory::Development => "Development",
            ProjectCategory::Infrastructure => "Infrastructure",
            ProjectCategory::Research => "Research",
            ProjectCategory::Marketing => "Marketing",
        }
    }

    /// Case-insensitive parse
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!(
                "unknown category '{}'. Valid options: Design, Development, Infrastructure, Research, Marketing",
                s
            ))
        })
    }
}

/// Presentation mode selecting which derived data to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Dashboard,
    Projects,
    Timeline,
    Kanban,
    Archive,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Dashboard => "dashboard",
            ViewType::Projects => "projects",
            ViewType::Timeline => "timeline",
            ViewType::Kanban => "kanban",
            ViewType::Archive => "archive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Some(ViewType::Dashboard),
            "projects" => Some(ViewType::Projects),
            "timeline" => Some(ViewType::Timeline),
            "kanban" => Some(ViewType::Kanban),
            "archive" => Some(ViewType::Archive),
            _ => None,
        }
    }

    /// Archived projects are only listed in the archive view
    pub fn shows_archived(&self) -> bool {
        matches!(self, ViewType::Archive)
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!(
                "unknown view '{}'. Valid options: dashboard, projects, timeline, kanban, archive",
                s
            ))
        })
    }
}

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percent complete; nominally 0-100 but not clamped
    pub progress: u32,
    pub category: ProjectCategory,
    pub team_members: Vec<String>,
    pub budget: f64,
    /// May exceed `budget`
    pub spent: f64,
    pub tasks: u32,
    pub completed_tasks: u32,
    pub tags: Vec<String>,
    pub last_activity: NaiveDate,
    pub starred: bool,
    pub archived: bool,
}

impl Project {
    /// Percentage of the budget already spent, 0 when there is no budget
    pub fn budget_utilization(&self) -> f64 {
        if self.budget > 0.0 {
            (self.spent / self.budget) * 100.0
        } else {
            0.0
        }
    }

    /// Percentage of tasks completed, 0 when there are no tasks
    pub fn task_completion(&self) -> f64 {
        if self.tasks > 0 {
            (self.completed_tasks as f64 / self.tasks as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Past its end date without being completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.end_date < today && self.status != ProjectStatus::Completed
    }

    /// Whether spending has gone past the budget
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

/// Raw creation input, as entered in a form
///
/// Dates and category are kept as text so that missing values can be
/// reported field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub priority: ProjectPriority,
    pub category: String,
    pub budget: f64,
    pub team_members: Vec<String>,
}

impl Default for NewProject {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            priority: ProjectPriority::Medium,
            category: String::new(),
            budget: 0.0,
            team_members: Vec::new(),
        }
    }
}

impl NewProject {
    /// Create input with the required fields set
    pub fn new(
        title: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: ProjectPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_team_members(mut self, members: Vec<String>) -> Self {
        self.team_members = members;
        self
    }
}
