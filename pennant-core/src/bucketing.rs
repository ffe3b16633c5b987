//! Deterministic percentage bucketing.
//!
//! Maps an evaluation context to a stable position in [0, 100) so the same
//! user lands on the same side of a percentage threshold on every call, and
//! keeps landing there as the threshold ramps up.

use sha2::{Digest, Sha256};

/// Stable bucket in [0, 100) for a flag/key pair.
///
/// Keyed by the flag so the same user population is sliced differently per
/// flag.
pub fn bucket(flag_key: &str, key: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(flag_key.as_bytes());
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let raw = u64::from_be_bytes(prefix);

    (raw as f64 / (u64::MAX as f64 + 1.0)) * 100.0
}

/// Whether `key` falls inside `percentage` for `flag_key`.
pub fn is_in_percentage(flag_key: &str, key: &str, percentage: f64) -> bool {
    bucket(flag_key, key) < percentage
}
