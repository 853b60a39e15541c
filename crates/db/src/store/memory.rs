//! In-process [`EntityStore`] mirroring the PostgreSQL schema's constraints.
//!
//! All tables sit behind one `RwLock`, so every write method observes and
//! mutates a consistent snapshot: a project and its owner link appear
//! together or not at all.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use inventory_core::roles::ROLE_OWNER;
use inventory_core::types::DbId;
use tokio::sync::RwLock;

use super::EntityStore;
use crate::error::{StoreError, StoreResult};
use crate::models::inventory::{CreateInventory, Inventory};
use crate::models::inventory_status::{
    CreateInventoryStatus, InventoryStatus, UpdateInventoryStatus,
};
use crate::models::inventory_type::{CreateInventoryType, InventoryType, UpdateInventoryType};
use crate::models::localization::{CreateLocalization, Localization, UpdateLocalization};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::user_project::UserProject;

/// One table: rows keyed by id plus its own id sequence.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }
}

#[derive(Debug, Default)]
struct Tables {
    projects: Table<Project>,
    user_projects: Table<UserProject>,
    localizations: Table<Localization>,
    statuses: Table<InventoryStatus>,
    types: Table<InventoryType>,
    inventory: Table<Inventory>,
}

impl Tables {
    fn require_project(&self, project_id: DbId) -> StoreResult<()> {
        if self.projects.rows.contains_key(&project_id) {
            Ok(())
        } else {
            Err(StoreError::Constraint(format!(
                "project_id {project_id} violates foreign key constraint"
            )))
        }
    }
}

/// NOT NULL + non-blank check applied to every text column.
fn required_text(column: &str, value: Option<&String>) -> StoreResult<String> {
    match value {
        None => Err(StoreError::Constraint(format!(
            "null value in column \"{column}\" violates not-null constraint"
        ))),
        Some(v) if v.trim().is_empty() => Err(StoreError::Constraint(format!(
            "blank value in column \"{column}\" violates check constraint"
        ))),
        Some(v) => Ok(v.clone()),
    }
}

/// Same check for a column a partial update may leave untouched.
fn optional_text(column: &str, value: Option<&String>) -> StoreResult<Option<String>> {
    value.map(|v| required_text(column, Some(v))).transpose()
}

/// [`EntityStore`] holding everything in memory. Data is lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_project(&self, input: &CreateProject, owner_id: DbId) -> StoreResult<Project> {
        let name = required_text("name", input.name.as_ref())?;
        let company_name = required_text("company_name", input.company_name.as_ref())?;

        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let project = tables.projects.insert_with(|id| Project {
            id,
            name,
            company_name,
            created_at: now,
            updated_at: now,
        });
        tables.user_projects.insert_with(|id| UserProject {
            id,
            user_id: owner_id,
            project_id: project.id,
            role: ROLE_OWNER.to_string(),
            created_at: now,
            updated_at: now,
        });
        Ok(project)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(self.tables.read().await.projects.get(id))
    }

    async fn list_projects_for_user(&self, user_id: DbId) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let memberships: Vec<DbId> = tables
            .user_projects
            .select(|link| link.user_id == user_id)
            .into_iter()
            .map(|link| link.project_id)
            .collect();
        Ok(tables
            .projects
            .select(|project| memberships.contains(&project.id)))
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let name = optional_text("name", input.name.as_ref())?;
        let company_name = optional_text("company_name", input.company_name.as_ref())?;

        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            project.name = name;
        }
        if let Some(company_name) = company_name {
            project.company_name = company_name;
        }
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.projects.rows.remove(&id).is_none() {
            return Ok(false);
        }
        tables.user_projects.rows.retain(|_, row| row.project_id != id);
        tables.localizations.rows.retain(|_, row| row.project_id != id);
        tables.statuses.rows.retain(|_, row| row.project_id != id);
        tables.types.rows.retain(|_, row| row.project_id != id);
        tables.inventory.rows.retain(|_, row| row.project_id != id);
        Ok(true)
    }

    async fn list_project_members(&self, project_id: DbId) -> StoreResult<Vec<UserProject>> {
        Ok(self
            .tables
            .read()
            .await
            .user_projects
            .select(|link| link.project_id == project_id))
    }

    async fn create_localization(&self, input: &CreateLocalization) -> StoreResult<Localization> {
        let place = required_text("place", input.place.as_ref())?;
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;
        let now = Utc::now();
        Ok(tables.localizations.insert_with(|id| Localization {
            id,
            project_id: input.project_id,
            place,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_localization(&self, id: DbId) -> StoreResult<Option<Localization>> {
        Ok(self.tables.read().await.localizations.get(id))
    }

    async fn list_localizations(&self, project_id: DbId) -> StoreResult<Vec<Localization>> {
        Ok(self
            .tables
            .read()
            .await
            .localizations
            .select(|row| row.project_id == project_id))
    }

    async fn update_localization(
        &self,
        id: DbId,
        input: &UpdateLocalization,
    ) -> StoreResult<Option<Localization>> {
        let place = optional_text("place", input.place.as_ref())?;

        let mut tables = self.tables.write().await;
        let Some(row) = tables.localizations.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(place) = place {
            row.place = place;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_localization(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.localizations.rows.remove(&id).is_none() {
            return Ok(false);
        }
        for item in tables.inventory.rows.values_mut() {
            if item.localization_id == Some(id) {
                item.localization_id = None;
            }
        }
        Ok(true)
    }

    async fn create_status(&self, input: &CreateInventoryStatus) -> StoreResult<InventoryStatus> {
        let status = required_text("status", input.status.as_ref())?;
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;
        let now = Utc::now();
        Ok(tables.statuses.insert_with(|id| InventoryStatus {
            id,
            project_id: input.project_id,
            status,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_status(&self, id: DbId) -> StoreResult<Option<InventoryStatus>> {
        Ok(self.tables.read().await.statuses.get(id))
    }

    async fn list_statuses(&self, project_id: DbId) -> StoreResult<Vec<InventoryStatus>> {
        Ok(self
            .tables
            .read()
            .await
            .statuses
            .select(|row| row.project_id == project_id))
    }

    async fn update_status(
        &self,
        id: DbId,
        input: &UpdateInventoryStatus,
    ) -> StoreResult<Option<InventoryStatus>> {
        let status = optional_text("status", input.status.as_ref())?;

        let mut tables = self.tables.write().await;
        let Some(row) = tables.statuses.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(status) = status {
            row.status = status;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_status(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.statuses.rows.remove(&id).is_none() {
            return Ok(false);
        }
        for item in tables.inventory.rows.values_mut() {
            if item.status_id == Some(id) {
                item.status_id = None;
            }
        }
        Ok(true)
    }

    async fn create_type(&self, input: &CreateInventoryType) -> StoreResult<InventoryType> {
        let name = required_text("name", input.name.as_ref())?;
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;
        let now = Utc::now();
        Ok(tables.types.insert_with(|id| InventoryType {
            id,
            project_id: input.project_id,
            name,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_type(&self, id: DbId) -> StoreResult<Option<InventoryType>> {
        Ok(self.tables.read().await.types.get(id))
    }

    async fn list_types(&self, project_id: DbId) -> StoreResult<Vec<InventoryType>> {
        Ok(self
            .tables
            .read()
            .await
            .types
            .select(|row| row.project_id == project_id))
    }

    async fn update_type(
        &self,
        id: DbId,
        input: &UpdateInventoryType,
    ) -> StoreResult<Option<InventoryType>> {
        let name = optional_text("name", input.name.as_ref())?;

        let mut tables = self.tables.write().await;
        let Some(row) = tables.types.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            row.name = name;
        }
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_type(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.types.rows.remove(&id).is_none() {
            return Ok(false);
        }
        for item in tables.inventory.rows.values_mut() {
            if item.type_id == Some(id) {
                item.type_id = None;
            }
        }
        Ok(true)
    }

    async fn create_inventory(&self, input: &CreateInventory) -> StoreResult<Inventory> {
        let name = required_text("name", Some(&input.name))?;
        let mut tables = self.tables.write().await;
        tables.require_project(input.project_id)?;

        let dangling = [
            (
                "localization_id",
                input
                    .localization_id
                    .filter(|id| !tables.localizations.rows.contains_key(id)),
            ),
            (
                "status_id",
                input.status_id.filter(|id| !tables.statuses.rows.contains_key(id)),
            ),
            (
                "type_id",
                input.type_id.filter(|id| !tables.types.rows.contains_key(id)),
            ),
        ];
        if let Some((column, Some(id))) = dangling.into_iter().find(|(_, id)| id.is_some()) {
            return Err(StoreError::Constraint(format!(
                "{column} {id} violates foreign key constraint"
            )));
        }

        let now = Utc::now();
        Ok(tables.inventory.insert_with(|id| Inventory {
            id,
            project_id: input.project_id,
            name,
            description: input.description.clone(),
            localization_id: input.localization_id,
            status_id: input.status_id,
            type_id: input.type_id,
            quantity: input.quantity.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_inventory(&self, id: DbId) -> StoreResult<Option<Inventory>> {
        Ok(self.tables.read().await.inventory.get(id))
    }

    async fn list_inventory(&self, project_id: DbId) -> StoreResult<Vec<Inventory>> {
        Ok(self
            .tables
            .read()
            .await
            .inventory
            .select(|row| row.project_id == project_id))
    }
}
