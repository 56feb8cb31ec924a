//! Project domain entities
//!
//! A `Project` is the aggregate root: once fetched through the hydrating
//! path, its material, step, and category collections reflect exactly the
//! rows joined to it at fetch time. Child entities are read-only here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A DIY project with its hydrated child collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier; 0 while the project is transient
    pub project_id: i64,
    pub project_name: String,
    pub estimated_hours: Decimal,
    pub actual_hours: Decimal,
    /// Difficulty rating, 1 (easy) to 5 (hard)
    pub difficulty: i64,
    pub notes: Option<String>,
    pub materials: Vec<Material>,
    pub steps: Vec<Step>,
    pub categories: Vec<Category>,
}

impl Project {
    /// Create a new transient project (no id assigned yet)
    pub fn new(
        name: impl Into<String>,
        estimated_hours: Decimal,
        actual_hours: Decimal,
        difficulty: i64,
    ) -> Self {
        Self {
            project_id: 0,
            project_name: name.into(),
            estimated_hours,
            actual_hours,
            difficulty,
            notes: None,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Set the project notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Produce a complete replacement record with the patch's fields applied
    /// over this project's current values.
    ///
    /// The merge happens here, at the caller's side of the storage boundary;
    /// the repository always receives every mutable field.
    pub fn merged_with(&self, patch: ProjectPatch) -> Project {
        Project {
            project_id: self.project_id,
            project_name: patch.project_name.unwrap_or_else(|| self.project_name.clone()),
            estimated_hours: patch.estimated_hours.unwrap_or(self.estimated_hours),
            actual_hours: patch.actual_hours.unwrap_or(self.actual_hours),
            difficulty: patch.difficulty.unwrap_or(self.difficulty),
            notes: patch.notes.or_else(|| self.notes.clone()),
            materials: self.materials.clone(),
            steps: self.steps.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Partial set of mutable project fields; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub project_name: Option<String>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i64>,
    pub notes: Option<String>,
}

/// A material needed for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: i64,
    pub project_id: i64,
    pub material_name: String,
    pub num_required: i64,
    pub cost: Decimal,
}

/// One step in completing a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step_id: i64,
    pub project_id: i64,
    pub step_text: String,
    pub step_order: i64,
}

/// A category a project can belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}
