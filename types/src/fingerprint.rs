//! Content fingerprint used for pledge deduplication.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::AccountId;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte fingerprint derived from a pledge's beneficiary and metadata.
///
/// One fingerprint maps to at most one pledge identifier, ever: the index
/// it keys is append-only, so a beneficiary + metadata pair can be used to
/// create exactly one pledge over the registry's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PledgeFingerprint([u8; 32]);

impl PledgeFingerprint {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive the fingerprint for a (beneficiary, metadata) pair.
    ///
    /// Blake2b-256 over the beneficiary bytes, a zero separator byte, and
    /// the metadata bytes. The separator keeps pairs like ("ab", "c") and
    /// ("a", "bc") from colliding.
    pub fn derive(beneficiary: &AccountId, metadata: &str) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(beneficiary.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(metadata.as_bytes());
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        Self(output)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PledgeFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PledgeFingerprint({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for PledgeFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let ben = AccountId::new("acct-beneficiary");
        let f1 = PledgeFingerprint::derive(&ben, "Monthly gift");
        let f2 = PledgeFingerprint::derive(&ben, "Monthly gift");
        assert_eq!(f1, f2);
    }

    #[test]
    fn derive_distinguishes_metadata() {
        let ben = AccountId::new("acct-beneficiary");
        let f1 = PledgeFingerprint::derive(&ben, "Monthly gift");
        let f2 = PledgeFingerprint::derive(&ben, "Annual gift");
        assert_ne!(f1, f2);
    }

    #[test]
    fn derive_separates_fields() {
        // Without a separator these two pairs would hash identically.
        let f1 = PledgeFingerprint::derive(&AccountId::new("ab"), "c");
        let f2 = PledgeFingerprint::derive(&AccountId::new("a"), "bc");
        assert_ne!(f1, f2);
    }

    #[test]
    fn derive_handles_empty_pair() {
        let f = PledgeFingerprint::derive(&AccountId::new(""), "");
        assert_ne!(f, PledgeFingerprint::new([0u8; 32]));
    }
}
