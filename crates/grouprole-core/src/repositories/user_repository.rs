//! User directory trait (port)

use async_trait::async_trait;

use grouprole_shared::UserId;

use crate::domain::PlatformUser;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<PlatformUser>, DomainError>;

    /// Adds a role to the user's role set, keeping existing roles.
    async fn add_role(&self, id: UserId, role: &str) -> Result<(), DomainError>;
}
