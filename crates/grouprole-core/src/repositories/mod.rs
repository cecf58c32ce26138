//! Capability traits for the host services this extension consumes (ports)

pub mod role_registry;
pub mod group_meta_repository;
pub mod user_repository;
pub mod group_authority;
pub mod notice_queue;

pub use role_registry::RoleRegistry;
pub use group_meta_repository::GroupMetaRepository;
pub use user_repository::UserRepository;
pub use group_authority::GroupAuthority;
pub use notice_queue::NoticeQueue;
