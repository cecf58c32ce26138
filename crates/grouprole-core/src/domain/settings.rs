// ============================================================================
// GroupRole Core - Settings Value Objects
// File: crates/grouprole-core/src/domain/settings.rs
// ============================================================================
//! Value objects for the group settings workflow

use serde::{Deserialize, Serialize};
use validator::Validate;

use grouprole_shared::GroupId;

use super::RoleOption;

/// Raw settings submission, as handed over by the host on a settings save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SettingsForm {
    /// Selected role name; absent or empty clears the association.
    #[validate(length(max = 191, message = "Role name too long"))]
    pub selected_role: Option<String>,

    /// Anti-forgery token issued alongside the settings control.
    pub nonce: Option<String>,
}

impl SettingsForm {
    pub fn new(selected_role: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            selected_role: Some(selected_role.into()),
            nonce: Some(nonce.into()),
        }
    }

    /// A submission with an empty selection, which clears the stored role.
    pub fn clearing(nonce: impl Into<String>) -> Self {
        Self {
            selected_role: None,
            nonce: Some(nonce.into()),
        }
    }
}

/// Data behind the associated-role selection control shown to group admins.
/// The host owns the actual rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSelectionControl {
    pub group_id: GroupId,
    pub options: Vec<RoleOption>,
    /// Currently stored role name, empty when none is set.
    pub selected: String,
    /// Anti-forgery token scoped to this group's save action.
    pub nonce: String,
}
