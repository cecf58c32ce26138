//! # GroupRole Security
//!
//! Anti-forgery token utilities for the group settings workflow.

pub mod nonce;

pub use nonce::NonceService;
