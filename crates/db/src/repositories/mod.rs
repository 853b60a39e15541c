//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any `PgExecutor` when the call may run inside
//! a transaction) as the first argument.

pub mod inventory_repo;
pub mod inventory_status_repo;
pub mod inventory_type_repo;
pub mod localization_repo;
pub mod project_repo;
pub mod user_project_repo;

pub use inventory_repo::InventoryRepo;
pub use inventory_status_repo::InventoryStatusRepo;
pub use inventory_type_repo::InventoryTypeRepo;
pub use localization_repo::LocalizationRepo;
pub use project_repo::ProjectRepo;
pub use user_project_repo::UserProjectRepo;
