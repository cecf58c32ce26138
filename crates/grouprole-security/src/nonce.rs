//! Anti-forgery tokens scoped to an action string
//!
//! Tokens are keyed digests, so verification recomputes them instead of
//! storing issued ones. Without a configured secret the key is random and
//! lives for the process; a token that outlives the key simply fails
//! verification, which is the stale-request path of the settings workflow.

use rand::Rng;
use sha2::{Digest, Sha256};

use grouprole_shared::constants::NONCE_ACTION_PREFIX;
use grouprole_shared::GroupId;

pub struct NonceService {
    key: [u8; 32],
}

impl NonceService {
    /// Service with a random per-process key.
    pub fn new() -> Self {
        Self { key: rand::rng().random() }
    }

    /// Service keyed by a configured secret; tokens stay verifiable across
    /// instances sharing the secret.
    pub fn with_secret(secret: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        Self { key: hasher.finalize().into() }
    }

    /// Issues a token bound to the given action.
    pub fn issue(&self, action: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.key);
        hasher.update(action.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Checks that a token was issued for the given action.
    pub fn verify(&self, token: &str, action: &str) -> bool {
        self.issue(action) == token
    }
}

impl Default for NonceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Action string for saving the associated role of one group.
pub fn save_action(group_id: GroupId) -> String {
    format!("{}-{}", NONCE_ACTION_PREFIX, group_id)
}
