//! Localization (storage place) model and DTOs.

use inventory_core::types::{DbId, Timestamp};
use inventory_core::validation::{clean_optional, clean_required};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::non_null;

/// A row from the `localizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Localization {
    pub id: DbId,
    pub project_id: DbId,
    pub place: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a localization. `project_id` always comes from the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLocalization {
    #[serde(skip)]
    pub project_id: DbId,
    pub place: Option<String>,
}

impl CreateLocalization {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            place: Some(clean_required("place", self.place.as_deref())?),
            ..self
        })
    }
}

/// DTO for partially updating a localization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocalization {
    #[serde(default, deserialize_with = "non_null")]
    pub place: Option<String>,
}

impl UpdateLocalization {
    pub fn cleaned(self) -> Result<Self, String> {
        Ok(Self {
            place: clean_optional("place", self.place.as_deref())?,
        })
    }
}
