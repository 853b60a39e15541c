//! The entity store the HTTP handlers persist through.
//!
//! [`EntityStore`] is object-safe so the API can hold an
//! `Arc<dyn EntityStore>` and swap backends without touching handlers:
//! - [`PgStore`] -- PostgreSQL via the repository layer.
//! - [`MemoryStore`] -- in-process tables, for tests and local runs.
//!
//! Lookups return `Ok(None)` / `Ok(false)` for missing rows; deciding that a
//! missing row is a 404 is the caller's job.

use async_trait::async_trait;
use inventory_core::types::DbId;

use crate::error::StoreResult;
use crate::models::inventory::{CreateInventory, Inventory};
use crate::models::inventory_status::{
    CreateInventoryStatus, InventoryStatus, UpdateInventoryStatus,
};
use crate::models::inventory_type::{CreateInventoryType, InventoryType, UpdateInventoryType};
use crate::models::localization::{CreateLocalization, Localization, UpdateLocalization};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::user_project::UserProject;

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // -- Projects ----------------------------------------------------------

    /// Create a project and its owner membership atomically.
    async fn create_project(&self, input: &CreateProject, owner_id: DbId) -> StoreResult<Project>;
    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;
    /// Projects the user holds a membership in, ordered by id.
    async fn list_projects_for_user(&self, user_id: DbId) -> StoreResult<Vec<Project>>;
    async fn update_project(&self, id: DbId, input: &UpdateProject)
        -> StoreResult<Option<Project>>;
    /// Delete a project together with everything scoped to it.
    async fn delete_project(&self, id: DbId) -> StoreResult<bool>;
    async fn list_project_members(&self, project_id: DbId) -> StoreResult<Vec<UserProject>>;

    // -- Localizations -----------------------------------------------------

    async fn create_localization(&self, input: &CreateLocalization) -> StoreResult<Localization>;
    async fn find_localization(&self, id: DbId) -> StoreResult<Option<Localization>>;
    async fn list_localizations(&self, project_id: DbId) -> StoreResult<Vec<Localization>>;
    async fn update_localization(
        &self,
        id: DbId,
        input: &UpdateLocalization,
    ) -> StoreResult<Option<Localization>>;
    async fn delete_localization(&self, id: DbId) -> StoreResult<bool>;

    // -- Inventory statuses ------------------------------------------------

    async fn create_status(&self, input: &CreateInventoryStatus) -> StoreResult<InventoryStatus>;
    async fn find_status(&self, id: DbId) -> StoreResult<Option<InventoryStatus>>;
    async fn list_statuses(&self, project_id: DbId) -> StoreResult<Vec<InventoryStatus>>;
    async fn update_status(
        &self,
        id: DbId,
        input: &UpdateInventoryStatus,
    ) -> StoreResult<Option<InventoryStatus>>;
    async fn delete_status(&self, id: DbId) -> StoreResult<bool>;

    // -- Inventory types ---------------------------------------------------

    async fn create_type(&self, input: &CreateInventoryType) -> StoreResult<InventoryType>;
    async fn find_type(&self, id: DbId) -> StoreResult<Option<InventoryType>>;
    async fn list_types(&self, project_id: DbId) -> StoreResult<Vec<InventoryType>>;
    async fn update_type(
        &self,
        id: DbId,
        input: &UpdateInventoryType,
    ) -> StoreResult<Option<InventoryType>>;
    async fn delete_type(&self, id: DbId) -> StoreResult<bool>;

    // -- Inventory ---------------------------------------------------------

    async fn create_inventory(&self, input: &CreateInventory) -> StoreResult<Inventory>;
    async fn find_inventory(&self, id: DbId) -> StoreResult<Option<Inventory>>;
    async fn list_inventory(&self, project_id: DbId) -> StoreResult<Vec<Inventory>>;
}
