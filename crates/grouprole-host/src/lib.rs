//! # GroupRole Host
//!
//! Host-facing glue: the event types the extension consumes, the bootstrap
//! (composition root), and in-memory host adapters for tests and demos.

pub mod bootstrap;
pub mod event;
pub mod memory;

pub use bootstrap::{GroupRoleExtension, HostComponents, MemoryHost};
pub use event::HostEvent;
