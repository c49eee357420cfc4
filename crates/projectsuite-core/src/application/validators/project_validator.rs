//! Project validation
//!
//! Validates creation input and turns the form's text fields into typed
//! values.

use chrono::NaiveDate;

use crate::domain::projects::{NewProject, ProjectCategory, ProjectPriority};
use crate::error::{Error, Result};

/// Date format accepted for start and end dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Creation input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProject {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub priority: ProjectPriority,
    pub category: ProjectCategory,
    pub budget: f64,
    pub team_members: Vec<String>,
}

/// Validator for project-related operations
pub struct ProjectValidator;

impl ProjectValidator {
    /// Validate creation input
    ///
    /// Rules, checked in this order:
    /// - Title must not be empty
    /// - Start date must be present and a valid `YYYY-MM-DD` date
    /// - End date must be present and a valid `YYYY-MM-DD` date
    /// - Category must be present and one of the known categories
    /// - Budget must be a finite, non-negative amount
    pub fn validate_new_project(input: &NewProject) -> Result<ValidatedProject> {
        Self::validate_title(&input.title)?;
        let start_date = Self::validate_date("startDate", &input.start_date)?;
        let end_date = Self::validate_date("endDate", &input.end_date)?;
        let category = Self::validate_category(&input.category)?;
        Self::validate_budget(input.budget)?;

        Ok(ValidatedProject {
            title: input.title.clone(),
            description: input.description.clone(),
            start_date,
            end_date,
            priority: input.priority,
            category,
            budget: input.budget,
            team_members: input.team_members.clone(),
        })
    }

    /// Validate a project title; any non-empty text is accepted as typed
    pub fn validate_title(title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(Error::validation("title", "Project title cannot be empty"));
        }
        Ok(())
    }

    /// Validate and parse a calendar date field
    pub fn validate_date(field: &str, value: &str) -> Result<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::validation(field, format!("missing {}", field)));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
            Error::validation(
                field,
                format!("'{}' is not a valid date (expected YYYY-MM-DD)", value),
            )
        })
    }

    /// Validate and parse the category
    pub fn validate_category(category: &str) -> Result<ProjectCategory> {
        if category.trim().is_empty() {
            return Err(Error::validation("category", "missing category"));
        }
        ProjectCategory::parse(category).ok_or_else(|| {
            Error::validation(
                "category",
                format!(
                    "Unknown category '{}'. Allowed: Design, Development, Infrastructure, Research, Marketing",
                    category
                ),
            )
        })
    }

    /// Validate a budget amount
    pub fn validate_budget(budget: f64) -> Result<()> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(Error::validation(
                "budget",
                "Budget must be a non-negative amount",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: Error) -> String {
        match err {
            Error::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input() {
        let input = NewProject::new("Brand refresh", "2025-01-01", "2025-02-01", "design")
            .with_budget(1500.0)
            .with_team_members(vec!["Ana".to_string()]);
        let validated = ProjectValidator::validate_new_project(&input).unwrap();
        assert_eq!(validated.category, ProjectCategory::Design);
        assert_eq!(
            validated.start_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(validated.team_members, vec!["Ana".to_string()]);
    }

    #[test]
    fn test_empty_title_rejected_first() {
        let input = NewProject::new("", "", "", "");
        let err = ProjectValidator::validate_new_project(&input).unwrap_err();
        assert_eq!(field_of(err), "title");
    }

    #[test]
    fn test_whitespace_title_accepted_verbatim() {
        let input = NewProject::new("   ", "2025-01-01", "2025-02-01", "Design");
        let validated = ProjectValidator::validate_new_project(&input).unwrap();
        assert_eq!(validated.title, "   ");
    }

    #[test]
    fn test_missing_dates_rejected() {
        let input = NewProject::new("X", "", "2025-02-01", "Design");
        assert_eq!(
            field_of(ProjectValidator::validate_new_project(&input).unwrap_err()),
            "startDate"
        );

        let input = NewProject::new("X", "2025-01-01", "  ", "Design");
        assert_eq!(
            field_of(ProjectValidator::validate_new_project(&input).unwrap_err()),
            "endDate"
        );
    }

    #[test]
    fn test_malformed_date_rejected() {
        let input = NewProject::new("X", "01/02/2025", "2025-02-01", "Design");
        let err = ProjectValidator::validate_new_project(&input).unwrap_err();
        assert!(err.to_string().contains("not a valid date"));
    }

    #[test]
    fn test_missing_category_rejected() {
        let input = NewProject::new("X", "2025-01-01", "2025-02-01", "");
        let err = ProjectValidator::validate_new_project(&input).unwrap_err();
        assert!(err.to_string().contains("missing category"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let input = NewProject::new("X", "2025-01-01", "2025-02-01", "Sales");
        let err = ProjectValidator::validate_new_project(&input).unwrap_err();
        assert_eq!(field_of(err), "category");
    }

    #[test]
    fn test_negative_budget_rejected() {
        let input = NewProject::new("X", "2025-01-01", "2025-02-01", "Research").with_budget(-1.0);
        let err = ProjectValidator::validate_new_project(&input).unwrap_err();
        assert_eq!(field_of(err), "budget");
    }
}
