//! # GroupRole Core
//!
//! Domain entities, services, and capability traits for associating a
//! platform role with a social group and granting it to joining members.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

pub use domain::*;
pub use error::DomainError;
pub use services::{GroupRoleService, RolePolicy};
