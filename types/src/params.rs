//! Registry parameters — the host-configurable values.

use serde::{Deserialize, Serialize};

/// Configuration for a pledge registry instance.
///
/// `creation_fee` is additionally mutable at runtime through the registry's
/// fee-change operation once an authority reference exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryParams {
    /// Maximum number of pledges the registry will ever create
    /// (counts inactive pledges too — identifiers are never reused).
    pub max_pledges: u64,

    /// Fee in smallest currency units transferred from the pledge owner to
    /// the authority account on every creation.
    pub creation_fee: u128,
}

impl RegistryParams {
    /// Protocol defaults for a live registry.
    pub fn protocol_defaults() -> Self {
        Self {
            max_pledges: 500,
            creation_fee: 500,
        }
    }
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self::protocol_defaults()
    }
}
