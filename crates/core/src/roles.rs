//! Project membership role codes stored in `user_projects.role`.

/// The user created the project and owns it.
pub const ROLE_OWNER: &str = "OW";
