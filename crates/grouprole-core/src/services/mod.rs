//! Domain services (business logic)

pub mod role_policy;
pub mod association_service;

pub use role_policy::RolePolicy;
pub use association_service::GroupRoleService;
