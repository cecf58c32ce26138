//! Drives the extension end to end against the in-memory host adapters.

use anyhow::Result;
use tracing::info;

use grouprole_core::domain::{PlatformUser, SettingsForm};
use grouprole_host::bootstrap::boot_from_env;
use grouprole_host::{HostComponents, HostEvent, MemoryHost};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    grouprole_shared::telemetry::init_telemetry();

    let host = MemoryHost::new();
    host.authority.grant_group_admin(1, 42);
    host.users.insert(PlatformUser::new(7, "Member Seven"));

    let components = HostComponents { groups_active: true };
    let Some(extension) = boot_from_env(&components, &host)? else {
        info!("Nothing to do, groups are inactive");
        return Ok(());
    };

    // The group admin opens the settings screen and picks a role.
    let control = extension
        .service()
        .settings_control(Some(42), 1)
        .await?
        .expect("group admin sees the control");
    info!("Settings control offers {} roles", control.options.len());

    extension
        .handle(HostEvent::GroupSettingsSubmitted {
            group_id: 42,
            form: SettingsForm::new("contributor", control.nonce),
            actor: 1,
        })
        .await?;

    // A user joins and picks up the associated role.
    extension
        .handle(HostEvent::UserJoinedGroup {
            group_id: 42,
            user_id: 7,
        })
        .await?;

    let user = host.users.get(7).expect("user exists");
    info!("User {} now holds roles {:?}", user.display_name, user.roles);
    Ok(())
}
