// ============================================================================
// GroupRole Core - Role Policy
// File: crates/grouprole-core/src/services/role_policy.rs
// ============================================================================
//! Stateless validation of role names against the live registry and the
//! restricted set

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use grouprole_shared::constants::DEFAULT_RESTRICTED_ROLES;

use crate::domain::RoleDescriptor;
use crate::error::DomainError;
use crate::repositories::RoleRegistry;

/// Decides which roles a group may be associated with.
pub struct RolePolicy<R: RoleRegistry> {
    registry: Arc<R>,
    restricted: HashSet<String>,
}

impl<R: RoleRegistry> RolePolicy<R> {
    pub fn new(registry: Arc<R>, restricted: impl IntoIterator<Item = String>) -> Self {
        Self {
            registry,
            restricted: restricted.into_iter().collect(),
        }
    }

    /// Policy with the stock restricted pair (site administrator and editor).
    pub fn with_default_restrictions(registry: Arc<R>) -> Self {
        Self::new(registry, DEFAULT_RESTRICTED_ROLES.iter().map(|r| r.to_string()))
    }

    /// The host registry minus every restricted role. No side effects.
    pub async fn assignable_roles(&self) -> Result<BTreeMap<String, RoleDescriptor>, DomainError> {
        let mut roles = self.registry.roles().await?;
        roles.retain(|name, _| !self.restricted.contains(name));
        Ok(roles)
    }

    /// True iff the role is currently offered by the registry and not
    /// restricted. Unknown names are not assignable.
    pub async fn is_assignable(&self, role: &str) -> Result<bool, DomainError> {
        Ok(self.assignable_roles().await?.contains_key(role))
    }

    pub fn is_restricted(&self, role: &str) -> bool {
        self.restricted.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::role_registry::MockRoleRegistry;

    fn registry_with(names: &[(&str, &str)]) -> MockRoleRegistry {
        let mut roles = BTreeMap::new();
        for (name, display) in names {
            roles.insert(name.to_string(), RoleDescriptor::new(*name, *display));
        }
        let mut registry = MockRoleRegistry::new();
        registry.expect_roles().returning(move || Ok(roles.clone()));
        registry
    }

    #[tokio::test]
    async fn test_unknown_role_is_not_assignable() {
        let registry = registry_with(&[("subscriber", "Subscriber")]);
        let policy = RolePolicy::with_default_restrictions(Arc::new(registry));

        assert!(!policy.is_assignable("no-such-role").await.unwrap());
        assert!(policy.is_assignable("subscriber").await.unwrap());
    }

    #[tokio::test]
    async fn test_restricted_roles_never_assignable_even_when_listed() {
        let registry = registry_with(&[
            ("administrator", "Administrator"),
            ("editor", "Editor"),
            ("contributor", "Contributor"),
        ]);
        let policy = RolePolicy::with_default_restrictions(Arc::new(registry));

        assert!(!policy.is_assignable("administrator").await.unwrap());
        assert!(!policy.is_assignable("editor").await.unwrap());
        assert!(policy.is_assignable("contributor").await.unwrap());

        let assignable = policy.assignable_roles().await.unwrap();
        assert!(!assignable.contains_key("administrator"));
        assert!(!assignable.contains_key("editor"));
        assert!(assignable.contains_key("contributor"));
    }

    #[tokio::test]
    async fn test_restricted_set_is_injected_configuration() {
        let registry = registry_with(&[
            ("moderator", "Moderator"),
            ("administrator", "Administrator"),
        ]);
        let policy = RolePolicy::new(Arc::new(registry), vec!["moderator".to_string()]);

        assert!(!policy.is_assignable("moderator").await.unwrap());
        // Only the injected set applies; the stock pair is not implicit.
        assert!(policy.is_assignable("administrator").await.unwrap());
        assert!(policy.is_restricted("moderator"));
        assert!(!policy.is_restricted("administrator"));
    }
}
