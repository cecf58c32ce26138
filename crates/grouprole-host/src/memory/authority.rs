//! In-memory authorization checks

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use grouprole_core::error::DomainError;
use grouprole_core::repositories::GroupAuthority;
use grouprole_shared::{GroupId, UserId};

pub struct InMemoryAuthority {
    super_admins: RwLock<HashSet<UserId>>,
    group_admins: RwLock<HashSet<(UserId, GroupId)>>,
}

impl InMemoryAuthority {
    pub fn new() -> Self {
        Self {
            super_admins: RwLock::new(HashSet::new()),
            group_admins: RwLock::new(HashSet::new()),
        }
    }

    pub fn grant_super_admin(&self, user_id: UserId) {
        self.super_admins
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id);
    }

    pub fn grant_group_admin(&self, user_id: UserId, group_id: GroupId) {
        self.group_admins
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((user_id, group_id));
    }
}

impl Default for InMemoryAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupAuthority for InMemoryAuthority {
    async fn is_super_admin(&self, user_id: UserId) -> Result<bool, DomainError> {
        Ok(self
            .super_admins
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&user_id))
    }

    async fn is_group_admin(
        &self,
        user_id: UserId,
        group_id: GroupId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .group_admins
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(user_id, group_id)))
    }
}
