//! In-memory role registry with a host-level filter hook

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use grouprole_core::domain::RoleDescriptor;
use grouprole_core::error::DomainError;
use grouprole_core::repositories::RoleRegistry;

type RoleMap = BTreeMap<String, RoleDescriptor>;
type RoleFilter = dyn Fn(RoleMap) -> RoleMap + Send + Sync;

/// Role registry backed by a map, with an optional filter applied on every
/// read the way host extensions filter the live registry.
pub struct InMemoryRoleRegistry {
    roles: RwLock<RoleMap>,
    filter: RwLock<Option<Box<RoleFilter>>>,
}

impl InMemoryRoleRegistry {
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(BTreeMap::new()),
            filter: RwLock::new(None),
        }
    }

    /// Registry preloaded with the stock platform roles.
    pub fn with_platform_defaults() -> Self {
        let registry = Self::new();
        for (name, display) in [
            ("administrator", "Administrator"),
            ("editor", "Editor"),
            ("author", "Author"),
            ("contributor", "Contributor"),
            ("subscriber", "Subscriber"),
        ] {
            registry.insert(RoleDescriptor::new(name, display));
        }
        registry
    }

    pub fn insert(&self, role: RoleDescriptor) {
        self.roles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(role.name.clone(), role);
    }

    pub fn remove(&self, name: &str) {
        self.roles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    /// Installs a host-level filter applied to every read.
    pub fn set_filter<F>(&self, filter: F)
    where
        F: Fn(RoleMap) -> RoleMap + Send + Sync + 'static,
    {
        *self.filter.write().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(filter));
    }
}

impl Default for InMemoryRoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRegistry for InMemoryRoleRegistry {
    async fn roles(&self) -> Result<RoleMap, DomainError> {
        let snapshot = self
            .roles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let filtered = match self
            .filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(filter) => filter(snapshot),
            None => snapshot,
        };
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filter_applies_on_read() {
        let registry = InMemoryRoleRegistry::with_platform_defaults();
        registry.set_filter(|mut roles| {
            roles.remove("subscriber");
            roles
        });

        let roles = registry.roles().await.unwrap();
        assert!(!roles.contains_key("subscriber"));
        assert!(roles.contains_key("contributor"));
    }

    #[tokio::test]
    async fn test_remove_simulates_registry_drift() {
        let registry = InMemoryRoleRegistry::with_platform_defaults();
        registry.remove("contributor");
        assert!(!registry.roles().await.unwrap().contains_key("contributor"));
    }
}
