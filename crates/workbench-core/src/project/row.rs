//! Database row types for the project aggregate
//!
//! Each row struct mirrors one table's columns and converts into its domain
//! entity. Hours and cost columns arrive as TEXT and are parsed into exact
//! decimals; a value that fails to parse means the schema has drifted and
//! surfaces as a mapping error.

use super::entity::{Category, Material, Project, Step};
use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// Database row for a project (scalar columns only)
#[derive(sqlx::FromRow)]
pub(crate) struct ProjectRow {
    project_id: i64,
    project_name: String,
    estimated_hours: Option<String>,
    actual_hours: Option<String>,
    difficulty: Option<i64>,
    notes: Option<String>,
}

impl ProjectRow {
    /// Convert into a `Project` with empty child collections
    pub(crate) fn into_project(self) -> Result<Project> {
        Ok(Project {
            project_id: self.project_id,
            project_name: self.project_name,
            estimated_hours: decimal_or_zero("estimated_hours", self.estimated_hours)?,
            actual_hours: decimal_or_zero("actual_hours", self.actual_hours)?,
            difficulty: self.difficulty.unwrap_or(0),
            notes: self.notes,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        })
    }
}

/// Database row for a material
#[derive(sqlx::FromRow)]
pub(crate) struct MaterialRow {
    material_id: i64,
    project_id: i64,
    material_name: String,
    num_required: Option<i64>,
    cost: Option<String>,
}

impl MaterialRow {
    pub(crate) fn into_material(self) -> Result<Material> {
        Ok(Material {
            material_id: self.material_id,
            project_id: self.project_id,
            material_name: self.material_name,
            num_required: self.num_required.unwrap_or(0),
            cost: decimal_or_zero("cost", self.cost)?,
        })
    }
}

/// Database row for a step
#[derive(sqlx::FromRow)]
pub(crate) struct StepRow {
    step_id: i64,
    project_id: i64,
    step_text: String,
    step_order: i64,
}

impl StepRow {
    pub(crate) fn into_step(self) -> Result<Step> {
        Ok(Step {
            step_id: self.step_id,
            project_id: self.project_id,
            step_text: self.step_text,
            step_order: self.step_order,
        })
    }
}

/// Database row for a category
#[derive(sqlx::FromRow)]
pub(crate) struct CategoryRow {
    category_id: i64,
    category_name: String,
}

impl CategoryRow {
    pub(crate) fn into_category(self) -> Result<Category> {
        Ok(Category {
            category_id: self.category_id,
            category_name: self.category_name,
        })
    }
}

/// Parse a TEXT decimal column; NULL maps to zero
fn decimal_or_zero(column: &str, value: Option<String>) -> Result<Decimal> {
    match value {
        None => Ok(Decimal::ZERO),
        Some(text) => text.parse::<Decimal>().map_err(|e| {
            Error::Mapping(format!("column {}: invalid decimal {:?}: {}", column, text, e))
        }),
    }
}

/// Classify an error returned while fetching rows.
///
/// Column-level failures (absent column, incompatible type) are mapping
/// errors; everything else is a storage failure.
pub(crate) fn classify_fetch_error(err: sqlx::Error) -> Error {
    match err {
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => Error::Mapping(err.to_string()),
        other => Error::Database(other),
    }
}
