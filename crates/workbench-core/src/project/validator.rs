//! Project validation
//!
//! Validates project inputs at the UI boundary, before anything reaches the
//! repository.

use super::entity::Project;
use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// Validator for project-related operations
pub struct ProjectValidator;

impl ProjectValidator {
    /// Validate a project name
    ///
    /// Rules:
    /// - Must not be empty after trimming
    /// - Must be 100 characters or less
    pub fn validate_name(name: &str) -> Result<()> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::InvalidInput("Project name cannot be empty".to_string()));
        }

        if name.len() > 100 {
            return Err(Error::InvalidInput(
                "Project name must be 100 characters or less".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate an hours value (estimated or actual): must be non-negative
    pub fn validate_hours(label: &str, hours: Decimal) -> Result<()> {
        if hours.is_sign_negative() {
            return Err(Error::InvalidInput(format!("{} cannot be negative", label)));
        }
        Ok(())
    }

    /// Validate a difficulty rating: must be between 1 and 5
    pub fn validate_difficulty(difficulty: i64) -> Result<()> {
        if !(1..=5).contains(&difficulty) {
            return Err(Error::InvalidInput(
                "Difficulty must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate all mutable fields of a project at once
    pub fn validate(project: &Project) -> Result<()> {
        Self::validate_name(&project.project_name)?;
        Self::validate_hours("Estimated hours", project.estimated_hours)?;
        Self::validate_hours("Actual hours", project.actual_hours)?;
        Self::validate_difficulty(project.difficulty)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(ProjectValidator::validate_name("Deck build").is_ok());
        assert!(ProjectValidator::validate_name("").is_err());
        assert!(ProjectValidator::validate_name("   ").is_err());
        assert!(ProjectValidator::validate_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_hours() {
        assert!(ProjectValidator::validate_hours("Estimated hours", Decimal::ZERO).is_ok());
        assert!(ProjectValidator::validate_hours("Estimated hours", Decimal::new(405, 1)).is_ok());
        assert!(ProjectValidator::validate_hours("Actual hours", Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_validate_difficulty() {
        for d in 1..=5 {
            assert!(ProjectValidator::validate_difficulty(d).is_ok());
        }
        assert!(ProjectValidator::validate_difficulty(0).is_err());
        assert!(ProjectValidator::validate_difficulty(6).is_err());
    }

    #[test]
    fn test_validate_project() {
        let project = Project::new("Deck build", Decimal::new(405, 1), Decimal::ZERO, 3);
        assert!(ProjectValidator::validate(&project).is_ok());

        let bad = Project::new("", Decimal::ZERO, Decimal::ZERO, 3);
        assert!(ProjectValidator::validate(&bad).is_err());
    }
}
