//! Project entity model and DTOs.

use inventory_core::types::{DbId, Timestamp};
use inventory_core::validation::{clean_optional, clean_required};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::non_null;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub company_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Fields are optional at the type level so a missing field reaches the
/// validation step instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl CreateProject {
    /// Trim and check every required field, returning the cleaned DTO.
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            name: Some(clean_required("name", self.name.as_deref())?),
            company_name: Some(clean_required(
                "company_name",
                self.company_name.as_deref(),
            )?),
        })
    }
}

/// DTO for partially updating a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub company_name: Option<String>,
}

impl UpdateProject {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            name: clean_optional("name", self.name.as_deref())?,
            company_name: clean_optional("company_name", self.company_name.as_deref())?,
        })
    }
}
