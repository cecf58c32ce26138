//! In-memory host adapters
//!
//! Stand-ins for the host platform services behind the core ports. Used by
//! the scenario tests and by embeddings that drive the extension without a
//! live host.

pub mod role_registry;
pub mod group_meta;
pub mod users;
pub mod authority;
pub mod notices;

pub use role_registry::InMemoryRoleRegistry;
pub use group_meta::InMemoryGroupMeta;
pub use users::InMemoryUserDirectory;
pub use authority::InMemoryAuthority;
pub use notices::InMemoryNoticeQueue;
