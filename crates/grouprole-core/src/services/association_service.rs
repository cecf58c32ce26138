// ============================================================================
// GroupRole Core - Association Service
// File: crates/grouprole-core/src/services/association_service.rs
// ============================================================================
//! Binds role policy to the group settings workflow and the join workflow

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use grouprole_security::nonce::{save_action, NonceService};
use grouprole_shared::constants::{ASSOCIATED_ROLE_META_KEY, MSG_INVALID_ROLE, MSG_RESTRICTED_ROLE};
use grouprole_shared::utils::sanitize_text_field;
use grouprole_shared::{GroupId, UserId};

use crate::domain::{Notice, RoleOption, RoleSelectionControl, SettingsForm};
use crate::error::DomainError;
use crate::repositories::{
    GroupAuthority, GroupMetaRepository, NoticeQueue, RoleRegistry, UserRepository,
};
use crate::services::RolePolicy;

/// Orchestrates the per-group associated-role setting and applies it to
/// joining users.
pub struct GroupRoleService<R, M, U, A, N>
where
    R: RoleRegistry,
    M: GroupMetaRepository,
    U: UserRepository,
    A: GroupAuthority,
    N: NoticeQueue,
{
    policy: RolePolicy<R>,
    meta_repo: Arc<M>,
    user_repo: Arc<U>,
    authority: Arc<A>,
    notices: Arc<N>,
    nonces: NonceService,
}

impl<R, M, U, A, N> GroupRoleService<R, M, U, A, N>
where
    R: RoleRegistry,
    M: GroupMetaRepository,
    U: UserRepository,
    A: GroupAuthority,
    N: NoticeQueue,
{
    pub fn new(
        policy: RolePolicy<R>,
        meta_repo: Arc<M>,
        user_repo: Arc<U>,
        authority: Arc<A>,
        notices: Arc<N>,
        nonces: NonceService,
    ) -> Self {
        Self {
            policy,
            meta_repo,
            user_repo,
            authority,
            notices,
            nonces,
        }
    }

    /// Builds the selection control for a group's settings screen.
    ///
    /// Returns `Ok(None)` when no group is in context or the viewer may not
    /// manage the group; the host then renders nothing, so the feature is
    /// invisible to unauthorized users.
    pub async fn settings_control(
        &self,
        group_id: Option<GroupId>,
        viewer: UserId,
    ) -> Result<Option<RoleSelectionControl>, DomainError> {
        let Some(group_id) = group_id else {
            return Ok(None);
        };

        if !self.can_modify_settings(viewer, group_id).await? {
            return Ok(None);
        }

        let selected = self
            .meta_repo
            .get_meta(group_id, ASSOCIATED_ROLE_META_KEY)
            .await?
            .unwrap_or_default();

        let options: Vec<RoleOption> = self
            .policy
            .assignable_roles()
            .await?
            .values()
            .map(RoleOption::from)
            .collect();

        Ok(Some(RoleSelectionControl {
            group_id,
            options,
            selected,
            nonce: self.nonces.issue(&save_action(group_id)),
        }))
    }

    /// Handles a settings submission for a group.
    ///
    /// The host invokes this for both the front-end settings save and the
    /// dashboard save, so the same submission can arrive more than once;
    /// every branch is idempotent. Authorization, nonce, and validation
    /// failures are absorbed here and never block the host save flow.
    pub async fn submit_settings(
        &self,
        group_id: GroupId,
        form: &SettingsForm,
        actor: UserId,
    ) -> Result<(), DomainError> {
        // 1. Authorization gate, silent on failure.
        if !self.can_modify_settings(actor, group_id).await? {
            debug!(
                "Ignoring settings submission for group {}: user {} is not an admin",
                group_id, actor
            );
            return Ok(());
        }

        // 2. Anti-forgery token must match this group's save action.
        let token_ok = form
            .nonce
            .as_deref()
            .map(|token| self.nonces.verify(token, &save_action(group_id)))
            .unwrap_or(false);
        if !token_ok {
            warn!(
                "Ignoring settings submission for group {}: nonce check failed",
                group_id
            );
            return Ok(());
        }

        // 3. Structural validation of the form itself.
        if form.validate().is_err() {
            warn!("Rejected malformed settings submission for group {}", group_id);
            self.notices.push(Notice::error(MSG_INVALID_ROLE)).await?;
            return Ok(());
        }

        // 4. Reduce the submitted value to plain text.
        let selected = form
            .selected_role
            .as_deref()
            .map(sanitize_text_field)
            .unwrap_or_default();

        // 5. Empty selection clears the association.
        if selected.is_empty() {
            self.meta_repo
                .delete_meta(group_id, ASSOCIATED_ROLE_META_KEY)
                .await?;
            info!("Cleared associated role for group {}", group_id);
            return Ok(());
        }

        // 6. Unknown, filtered-out, or restricted role: no state change.
        //    Restricted roles never appear assignable, but get their own
        //    message.
        if !self.policy.is_assignable(&selected).await? {
            if self.policy.is_restricted(&selected) {
                warn!(
                    "Rejected restricted role {:?} for group {}",
                    selected, group_id
                );
                self.notices.push(Notice::error(MSG_RESTRICTED_ROLE)).await?;
            } else {
                warn!("Rejected invalid role {:?} for group {}", selected, group_id);
                self.notices.push(Notice::error(MSG_INVALID_ROLE)).await?;
            }
            return Ok(());
        }

        // 7. Persist, overwriting any prior value.
        self.meta_repo
            .set_meta(group_id, ASSOCIATED_ROLE_META_KEY, &selected)
            .await?;
        info!("Associated role {:?} with group {}", selected, group_id);
        Ok(())
    }

    /// Grants the group's associated role, if any, to a user who just joined.
    ///
    /// Best effort: the membership already exists when this runs, so every
    /// failure short of a host store error is a silent no-op.
    pub async fn on_user_joined(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<(), DomainError> {
        // 1. The host could not resolve the user: nothing to grant to.
        let Some(user) = self.user_repo.find_by_id(user_id).await? else {
            debug!(
                "Join event for group {} carried unknown user {}",
                group_id, user_id
            );
            return Ok(());
        };

        // 2. No association configured for this group.
        let Some(role) = self
            .meta_repo
            .get_meta(group_id, ASSOCIATED_ROLE_META_KEY)
            .await?
        else {
            return Ok(());
        };
        if role.is_empty() {
            return Ok(());
        }

        // 3. Re-validate at grant time; the registry may have drifted since
        //    the role was saved.
        if !self.policy.is_assignable(&role).await? {
            warn!(
                "Stored role {:?} for group {} is no longer assignable, skipping grant",
                role, group_id
            );
            return Ok(());
        }

        // 4. Additive grant; existing roles stay untouched.
        self.user_repo.add_role(user.id, &role).await?;
        info!(
            "Granted role {:?} to user {} on joining group {}",
            role, user.id, group_id
        );
        Ok(())
    }

    async fn can_modify_settings(
        &self,
        user_id: UserId,
        group_id: GroupId,
    ) -> Result<bool, DomainError> {
        if self.authority.is_super_admin(user_id).await? {
            return Ok(true);
        }
        self.authority.is_group_admin(user_id, group_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::domain::RoleDescriptor;
    use crate::repositories::group_authority::MockGroupAuthority;
    use crate::repositories::group_meta_repository::MockGroupMetaRepository;
    use crate::repositories::notice_queue::MockNoticeQueue;
    use crate::repositories::role_registry::MockRoleRegistry;
    use crate::repositories::user_repository::MockUserRepository;

    const NONCE_SECRET: &str = "unit-test-secret";

    type TestService = GroupRoleService<
        MockRoleRegistry,
        MockGroupMetaRepository,
        MockUserRepository,
        MockGroupAuthority,
        MockNoticeQueue,
    >;

    fn service(
        registry: MockRoleRegistry,
        meta: MockGroupMetaRepository,
        users: MockUserRepository,
        authority: MockGroupAuthority,
        notices: MockNoticeQueue,
    ) -> TestService {
        GroupRoleService::new(
            RolePolicy::with_default_restrictions(Arc::new(registry)),
            Arc::new(meta),
            Arc::new(users),
            Arc::new(authority),
            Arc::new(notices),
            NonceService::with_secret(NONCE_SECRET),
        )
    }

    fn valid_nonce(group_id: GroupId) -> String {
        NonceService::with_secret(NONCE_SECRET).issue(&save_action(group_id))
    }

    fn registry_with(names: &[(&str, &str)]) -> MockRoleRegistry {
        let mut roles = BTreeMap::new();
        for (name, display) in names {
            roles.insert(name.to_string(), RoleDescriptor::new(*name, *display));
        }
        let mut registry = MockRoleRegistry::new();
        registry.expect_roles().returning(move || Ok(roles.clone()));
        registry
    }

    fn nobody_is_admin() -> MockGroupAuthority {
        let mut authority = MockGroupAuthority::new();
        authority.expect_is_super_admin().returning(|_| Ok(false));
        authority.expect_is_group_admin().returning(|_, _| Ok(false));
        authority
    }

    fn group_admin(user_id: UserId, group_id: GroupId) -> MockGroupAuthority {
        let mut authority = MockGroupAuthority::new();
        authority.expect_is_super_admin().returning(|_| Ok(false));
        authority
            .expect_is_group_admin()
            .returning(move |u, g| Ok(u == user_id && g == group_id));
        authority
    }

    // Mocks without expectations panic on any call, so the store mocks
    // double as no-write assertions in the silent-failure tests.

    #[tokio::test]
    async fn test_unauthorized_submission_is_a_silent_noop() {
        let service = service(
            MockRoleRegistry::new(),
            MockGroupMetaRepository::new(),
            MockUserRepository::new(),
            nobody_is_admin(),
            MockNoticeQueue::new(),
        );

        let form = SettingsForm::new("contributor", valid_nonce(42));
        service.submit_settings(42, &form, 99).await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_viewer_gets_no_control() {
        let service = service(
            MockRoleRegistry::new(),
            MockGroupMetaRepository::new(),
            MockUserRepository::new(),
            nobody_is_admin(),
            MockNoticeQueue::new(),
        );

        let control = service.settings_control(Some(42), 99).await.unwrap();
        assert!(control.is_none());
    }

    #[tokio::test]
    async fn test_missing_group_context_yields_no_control() {
        let service = service(
            MockRoleRegistry::new(),
            MockGroupMetaRepository::new(),
            MockUserRepository::new(),
            MockGroupAuthority::new(),
            MockNoticeQueue::new(),
        );

        let control = service.settings_control(None, 1).await.unwrap();
        assert!(control.is_none());
    }

    #[tokio::test]
    async fn test_failed_nonce_is_a_silent_noop() {
        let service = service(
            MockRoleRegistry::new(),
            MockGroupMetaRepository::new(),
            MockUserRepository::new(),
            group_admin(1, 42),
            MockNoticeQueue::new(),
        );

        let stale = SettingsForm::new("contributor", valid_nonce(43));
        service.submit_settings(42, &stale, 1).await.unwrap();

        let absent = SettingsForm {
            selected_role: Some("contributor".into()),
            nonce: None,
        };
        service.submit_settings(42, &absent, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_restricted_role_queues_distinct_message() {
        let mut notices = MockNoticeQueue::new();
        notices
            .expect_push()
            .withf(|notice| notice.text == MSG_RESTRICTED_ROLE)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(
            registry_with(&[("administrator", "Administrator"), ("author", "Author")]),
            MockGroupMetaRepository::new(),
            MockUserRepository::new(),
            group_admin(1, 42),
            notices,
        );

        let form = SettingsForm::new("administrator", valid_nonce(42));
        service.submit_settings(42, &form, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_role_queues_invalid_message() {
        let mut notices = MockNoticeQueue::new();
        notices
            .expect_push()
            .withf(|notice| notice.text == MSG_INVALID_ROLE)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(
            registry_with(&[("author", "Author")]),
            MockGroupMetaRepository::new(),
            MockUserRepository::new(),
            group_admin(1, 42),
            notices,
        );

        let form = SettingsForm::new("no-such-role", valid_nonce(42));
        service.submit_settings(42, &form, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_submitted_role_is_sanitized_before_validation() {
        let mut meta = MockGroupMetaRepository::new();
        meta.expect_set_meta()
            .withf(|group_id, key, value| {
                *group_id == 42 && key == ASSOCIATED_ROLE_META_KEY && value == "author"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = service(
            registry_with(&[("author", "Author")]),
            meta,
            MockUserRepository::new(),
            group_admin(1, 42),
            MockNoticeQueue::new(),
        );

        let form = SettingsForm::new("  <b>author</b>  ", valid_nonce(42));
        service.submit_settings(42, &form, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_join_with_unresolvable_user_is_a_silent_noop() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = service(
            MockRoleRegistry::new(),
            MockGroupMetaRepository::new(),
            users,
            MockGroupAuthority::new(),
            MockNoticeQueue::new(),
        );

        service.on_user_joined(42, 7).await.unwrap();
    }
}
