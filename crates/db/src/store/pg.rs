use async_trait::async_trait;
use inventory_core::types::DbId;
use sqlx::PgPool;

use super::EntityStore;
use crate::error::StoreResult;
use crate::models::inventory::{CreateInventory, Inventory};
use crate::models::inventory_status::{
    CreateInventoryStatus, InventoryStatus, UpdateInventoryStatus,
};
use crate::models::inventory_type::{CreateInventoryType, InventoryType, UpdateInventoryType};
use crate::models::localization::{CreateLocalization, Localization, UpdateLocalization};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::user_project::UserProject;
use crate::repositories::{
    InventoryRepo, InventoryStatusRepo, InventoryTypeRepo, LocalizationRepo, ProjectRepo,
    UserProjectRepo,
};

/// [`EntityStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn create_project(&self, input: &CreateProject, owner_id: DbId) -> StoreResult<Project> {
        Ok(ProjectRepo::create_with_owner(&self.pool, input, owner_id).await?)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_projects_for_user(&self, user_id: DbId) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list_for_user(&self.pool, user_id).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn list_project_members(&self, project_id: DbId) -> StoreResult<Vec<UserProject>> {
        Ok(UserProjectRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn create_localization(&self, input: &CreateLocalization) -> StoreResult<Localization> {
        Ok(LocalizationRepo::create(&self.pool, input).await?)
    }

    async fn find_localization(&self, id: DbId) -> StoreResult<Option<Localization>> {
        Ok(LocalizationRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_localizations(&self, project_id: DbId) -> StoreResult<Vec<Localization>> {
        Ok(LocalizationRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn update_localization(
        &self,
        id: DbId,
        input: &UpdateLocalization,
    ) -> StoreResult<Option<Localization>> {
        Ok(LocalizationRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_localization(&self, id: DbId) -> StoreResult<bool> {
        Ok(LocalizationRepo::delete(&self.pool, id).await?)
    }

    async fn create_status(&self, input: &CreateInventoryStatus) -> StoreResult<InventoryStatus> {
        Ok(InventoryStatusRepo::create(&self.pool, input).await?)
    }

    async fn find_status(&self, id: DbId) -> StoreResult<Option<InventoryStatus>> {
        Ok(InventoryStatusRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_statuses(&self, project_id: DbId) -> StoreResult<Vec<InventoryStatus>> {
        Ok(InventoryStatusRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn update_status(
        &self,
        id: DbId,
        input: &UpdateInventoryStatus,
    ) -> StoreResult<Option<InventoryStatus>> {
        Ok(InventoryStatusRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_status(&self, id: DbId) -> StoreResult<bool> {
        Ok(InventoryStatusRepo::delete(&self.pool, id).await?)
    }

    async fn create_type(&self, input: &CreateInventoryType) -> StoreResult<InventoryType> {
        Ok(InventoryTypeRepo::create(&self.pool, input).await?)
    }

    async fn find_type(&self, id: DbId) -> StoreResult<Option<InventoryType>> {
        Ok(InventoryTypeRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_types(&self, project_id: DbId) -> StoreResult<Vec<InventoryType>> {
        Ok(InventoryTypeRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn update_type(
        &self,
        id: DbId,
        input: &UpdateInventoryType,
    ) -> StoreResult<Option<InventoryType>> {
        Ok(InventoryTypeRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_type(&self, id: DbId) -> StoreResult<bool> {
        Ok(InventoryTypeRepo::delete(&self.pool, id).await?)
    }

    async fn create_inventory(&self, input: &CreateInventory) -> StoreResult<Inventory> {
        Ok(InventoryRepo::create(&self.pool, input).await?)
    }

    async fn find_inventory(&self, id: DbId) -> StoreResult<Option<Inventory>> {
        Ok(InventoryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_inventory(&self, project_id: DbId) -> StoreResult<Vec<Inventory>> {
        Ok(InventoryRepo::list_by_project(&self.pool, project_id).await?)
    }
}
