//! Role entities as the host registry describes them

use serde::{Deserialize, Serialize};

/// A platform role: registry key plus display data and capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDescriptor {
    pub name: String,
    pub display_name: String,
    pub capabilities: Vec<String>,
}

impl RoleDescriptor {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            capabilities: Vec::new(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }
}

/// One entry of the settings selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub name: String,
    pub display_name: String,
}

impl From<&RoleDescriptor> for RoleOption {
    fn from(role: &RoleDescriptor) -> Self {
        Self {
            name: role.name.clone(),
            display_name: role.display_name.clone(),
        }
    }
}
