//! Host lifecycle events consumed by the extension

use grouprole_core::domain::SettingsForm;
use grouprole_shared::{GroupId, UserId};

/// Host callbacks the extension subscribes to.
///
/// The three settings variants exist because the host fires distinct hooks
/// for the front-end save, the dashboard save, and the group update; all of
/// them carry the same submission and route to the same idempotent handler.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Front-end group settings screen was saved.
    GroupSettingsSubmitted {
        group_id: GroupId,
        form: SettingsForm,
        actor: UserId,
    },
    /// Group edit screen in the admin dashboard was saved.
    GroupAdminSaved {
        group_id: GroupId,
        form: SettingsForm,
        actor: UserId,
    },
    /// The group record itself was updated.
    GroupUpdated {
        group_id: GroupId,
        form: SettingsForm,
        actor: UserId,
    },
    /// A user became a member of a group.
    UserJoinedGroup { group_id: GroupId, user_id: UserId },
}
