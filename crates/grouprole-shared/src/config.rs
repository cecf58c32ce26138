//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_RESTRICTED_ROLES;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub roles: RoleSettings,
    #[serde(default)]
    pub security: SecuritySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoleSettings {
    /// Roles a group may never be associated with.
    pub restricted: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SecuritySettings {
    /// Secret for anti-forgery tokens; a random per-process key is used
    /// when unset.
    pub nonce_secret: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let restricted_defaults: Vec<String> = DEFAULT_RESTRICTED_ROLES
            .iter()
            .map(|r| r.to_string())
            .collect();
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "grouprole")?
            .set_default("roles.restricted", restricted_defaults)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_restrict_site_admin_roles() {
        let config = AppConfig::load().expect("defaults load without files");
        assert!(config.roles.restricted.contains(&"administrator".to_string()));
        assert!(config.roles.restricted.contains(&"editor".to_string()));
        assert!(config.security.nonce_secret.is_none());
    }
}
