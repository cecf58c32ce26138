//! # GroupRole Core - Domain Module
//!
//! Domain entities for the group role association workflow.

pub mod role;
pub mod settings;
pub mod notice;
pub mod platform_user;

// Re-export all entities
pub use role::{RoleDescriptor, RoleOption};
pub use settings::{RoleSelectionControl, SettingsForm};
pub use notice::{Notice, NoticeKind};
pub use platform_user::PlatformUser;
