//! In-memory user directory

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use grouprole_core::domain::PlatformUser;
use grouprole_core::error::DomainError;
use grouprole_core::repositories::UserRepository;
use grouprole_shared::UserId;

pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, PlatformUser>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, user: PlatformUser) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id, user);
    }

    pub fn get(&self, id: UserId) -> Option<PlatformUser> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<Option<PlatformUser>, DomainError> {
        Ok(self.get(id))
    }

    async fn add_role(&self, id: UserId, role: &str) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let user = users
            .get_mut(&id)
            .ok_or_else(|| DomainError::UserStoreError(format!("unknown user {}", id)))?;
        if !user.has_role(role) {
            user.roles.push(role.to_string());
        }
        Ok(())
    }
}
