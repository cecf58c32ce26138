//! Common types

/// Opaque host group identifier.
pub type GroupId = u64;

/// Opaque host user identifier.
pub type UserId = u64;
