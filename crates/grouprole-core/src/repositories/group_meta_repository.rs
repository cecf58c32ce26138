//! Group metadata trait (port)

use async_trait::async_trait;

use grouprole_shared::GroupId;

use crate::error::DomainError;

/// Generic key/value metadata the host attaches to a group.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupMetaRepository: Send + Sync {
    async fn get_meta(&self, group_id: GroupId, key: &str) -> Result<Option<String>, DomainError>;
    async fn set_meta(&self, group_id: GroupId, key: &str, value: &str) -> Result<(), DomainError>;
    async fn delete_meta(&self, group_id: GroupId, key: &str) -> Result<(), DomainError>;
}
