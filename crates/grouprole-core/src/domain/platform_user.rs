//! Host user record, reduced to what the join workflow needs

use serde::{Deserialize, Serialize};

use grouprole_shared::UserId;

/// A resolved host user with the roles currently on the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUser {
    pub id: UserId,
    pub display_name: String,
    pub roles: Vec<String>,
}

impl PlatformUser {
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let user = PlatformUser::new(7, "Member Seven").with_role("subscriber");
        assert!(user.has_role("subscriber"));
        assert!(!user.has_role("contributor"));
    }
}
