//! In-memory per-group metadata store

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use grouprole_core::error::DomainError;
use grouprole_core::repositories::GroupMetaRepository;
use grouprole_shared::GroupId;

/// Key/value store keyed by (group id, meta key). Writes overwrite, so the
/// store carries last-writer-wins semantics like the host metadata table.
pub struct InMemoryGroupMeta {
    entries: RwLock<HashMap<(GroupId, String), String>>,
}

impl InMemoryGroupMeta {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGroupMeta {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupMetaRepository for InMemoryGroupMeta {
    async fn get_meta(&self, group_id: GroupId, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(group_id, key.to_string()))
            .cloned())
    }

    async fn set_meta(&self, group_id: GroupId, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((group_id, key.to_string()), value.to_string());
        Ok(())
    }

    async fn delete_meta(&self, group_id: GroupId, key: &str) -> Result<(), DomainError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&(group_id, key.to_string()));
        Ok(())
    }
}
