// ============================================================================
// GroupRole Host - Bootstrap
// File: crates/grouprole-host/src/bootstrap.rs
// ============================================================================
//! Composition root wiring the association service to host callbacks
//!
//! One extension value is constructed at application start and handed the
//! host's events; there is no hidden global instance.

use std::sync::Arc;

use tracing::info;

use grouprole_core::error::DomainError;
use grouprole_core::repositories::{
    GroupAuthority, GroupMetaRepository, NoticeQueue, RoleRegistry, UserRepository,
};
use grouprole_core::services::{GroupRoleService, RolePolicy};
use grouprole_security::NonceService;
use grouprole_shared::config::AppConfig;
use grouprole_shared::AppError;

use crate::event::HostEvent;
use crate::memory::{
    InMemoryAuthority, InMemoryGroupMeta, InMemoryNoticeQueue, InMemoryRoleRegistry,
    InMemoryUserDirectory,
};

/// Host components the extension depends on.
#[derive(Debug, Clone, Default)]
pub struct HostComponents {
    /// Whether the host's social-group subsystem is active.
    pub groups_active: bool,
}

/// The booted extension; owns the service and routes host events into it.
pub struct GroupRoleExtension<R, M, U, A, N>
where
    R: RoleRegistry,
    M: GroupMetaRepository,
    U: UserRepository,
    A: GroupAuthority,
    N: NoticeQueue,
{
    service: GroupRoleService<R, M, U, A, N>,
}

impl<R, M, U, A, N> GroupRoleExtension<R, M, U, A, N>
where
    R: RoleRegistry,
    M: GroupMetaRepository,
    U: UserRepository,
    A: GroupAuthority,
    N: NoticeQueue,
{
    /// Boots against the host, or quietly declines when the social-group
    /// component is not active.
    pub fn boot(
        components: &HostComponents,
        service: GroupRoleService<R, M, U, A, N>,
    ) -> Option<Self> {
        if !components.groups_active {
            info!("Groups component inactive, group role extension not loaded");
            return None;
        }
        info!("Group role extension loaded");
        Some(Self { service })
    }

    pub fn service(&self) -> &GroupRoleService<R, M, U, A, N> {
        &self.service
    }

    /// Routes one host callback to the matching handler.
    pub async fn handle(&self, event: HostEvent) -> Result<(), DomainError> {
        match event {
            HostEvent::GroupSettingsSubmitted { group_id, form, actor }
            | HostEvent::GroupAdminSaved { group_id, form, actor }
            | HostEvent::GroupUpdated { group_id, form, actor } => {
                self.service.submit_settings(group_id, &form, actor).await
            }
            HostEvent::UserJoinedGroup { group_id, user_id } => {
                self.service.on_user_joined(group_id, user_id).await
            }
        }
    }
}

/// Extension wired to the in-memory host adapters.
pub type MemoryExtension = GroupRoleExtension<
    InMemoryRoleRegistry,
    InMemoryGroupMeta,
    InMemoryUserDirectory,
    InMemoryAuthority,
    InMemoryNoticeQueue,
>;

/// The in-memory host services, shared with the extension.
pub struct MemoryHost {
    pub registry: Arc<InMemoryRoleRegistry>,
    pub meta: Arc<InMemoryGroupMeta>,
    pub users: Arc<InMemoryUserDirectory>,
    pub authority: Arc<InMemoryAuthority>,
    pub notices: Arc<InMemoryNoticeQueue>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(InMemoryRoleRegistry::with_platform_defaults()),
            meta: Arc::new(InMemoryGroupMeta::new()),
            users: Arc::new(InMemoryUserDirectory::new()),
            authority: Arc::new(InMemoryAuthority::new()),
            notices: Arc::new(InMemoryNoticeQueue::new()),
        }
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the service against the in-memory adapters and boots it.
pub fn boot_in_memory(
    components: &HostComponents,
    config: &AppConfig,
    host: &MemoryHost,
) -> Option<MemoryExtension> {
    let policy = RolePolicy::new(
        Arc::clone(&host.registry),
        config.roles.restricted.iter().cloned(),
    );
    let nonces = match config.security.nonce_secret.as_deref() {
        Some(secret) => NonceService::with_secret(secret),
        None => NonceService::new(),
    };
    let service = GroupRoleService::new(
        policy,
        Arc::clone(&host.meta),
        Arc::clone(&host.users),
        Arc::clone(&host.authority),
        Arc::clone(&host.notices),
        nonces,
    );
    GroupRoleExtension::boot(components, service)
}

/// Loads configuration and boots the in-memory wiring in one step.
pub fn boot_from_env(
    components: &HostComponents,
    host: &MemoryHost,
) -> Result<Option<MemoryExtension>, AppError> {
    let config = AppConfig::load()?;
    Ok(boot_in_memory(components, &config, host))
}
