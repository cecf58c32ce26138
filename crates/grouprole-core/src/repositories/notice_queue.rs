//! Transient notice trait (port)

use async_trait::async_trait;

use crate::domain::Notice;
use crate::error::DomainError;

/// Host queue for user-facing messages shown on the next render.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeQueue: Send + Sync {
    async fn push(&self, notice: Notice) -> Result<(), DomainError>;
}
