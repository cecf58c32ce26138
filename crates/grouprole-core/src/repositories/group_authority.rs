//! Authorization trait (port)

use async_trait::async_trait;

use grouprole_shared::{GroupId, UserId};

use crate::error::DomainError;

/// Host checks answering who may manage a group's settings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupAuthority: Send + Sync {
    async fn is_super_admin(&self, user_id: UserId) -> Result<bool, DomainError>;
    async fn is_group_admin(&self, user_id: UserId, group_id: GroupId)
        -> Result<bool, DomainError>;
}
