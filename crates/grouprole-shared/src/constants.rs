//! Application-wide constants

/// Group metadata key holding the associated role name.
pub const ASSOCIATED_ROLE_META_KEY: &str = "_bp_group_associated_role";

/// Roles that may never be associated with a group.
pub const DEFAULT_RESTRICTED_ROLES: &[&str] = &["administrator", "editor"];

/// Action prefix for the settings-save nonce; the group id is appended.
pub const NONCE_ACTION_PREFIX: &str = "group-associated-role-save";

pub const MSG_INVALID_ROLE: &str = "Please provide a valid group role.";
pub const MSG_RESTRICTED_ROLE: &str =
    "Restricted role can not be saved as the group associated role.";
