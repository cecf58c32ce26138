//! Domain errors
//!
//! Only host-side (port) failures become errors; authorization, nonce, and
//! role-validation failures are absorbed by the service so the host
//! operation they ride on is never blocked.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Role registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("Group metadata store error: {0}")]
    MetaStoreError(String),

    #[error("User store error: {0}")]
    UserStoreError(String),

    #[error("Notice queue error: {0}")]
    NoticeQueueError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
