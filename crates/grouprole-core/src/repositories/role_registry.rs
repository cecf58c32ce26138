//! Role registry trait (port)

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::RoleDescriptor;
use crate::error::DomainError;

/// The host's role registry, after any host-level filtering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRegistry: Send + Sync {
    async fn roles(&self) -> Result<BTreeMap<String, RoleDescriptor>, DomainError>;
}
