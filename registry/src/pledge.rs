//! Pledge records, amendment records, and creation terms.

use pledge_types::{AccountId, Currency, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum pledge frequency: occurrences per 365-day cycle.
pub const MAX_FREQUENCY: u32 = 365;

/// Maximum interval between executions, in block/time units.
pub const MAX_INTERVAL: u32 = 4320;

/// Maximum metadata length in characters.
pub const MAX_METADATA_CHARS: usize = 100;

/// A recurring value-transfer commitment.
///
/// Immutable once stored, except through the registry's amendment operation,
/// which may touch only `amount`, `frequency`, and `created_at` (re-stamped
/// as the amendment time), and the host-driven `active`/`executions`
/// bookkeeping hooks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pledge {
    /// The account that created the pledge; only it may amend.
    pub owner: AccountId,
    /// Committed amount per execution, smallest currency unit. Always > 0.
    pub amount: u128,
    /// Occurrences per 365-day cycle (1..=365).
    pub frequency: u32,
    /// Number of cycles the pledge runs for; 0 = indefinite.
    pub duration: u32,
    /// Receiving account. Always non-empty.
    pub beneficiary: AccountId,
    /// Inactive pledges reject amendment but keep their fingerprint claimed.
    pub active: bool,
    /// Creation time, re-stamped on every amendment.
    pub created_at: Timestamp,
    /// Free-form description, at most 100 characters. Part of the
    /// deduplication fingerprint together with `beneficiary`.
    pub metadata: String,
    pub currency: Currency,
    /// Block/time units between executions (1..=4320).
    pub interval: u32,
    /// Executions recorded by the host's disbursement machinery.
    pub executions: u64,
}

/// Parameters for a new pledge, as submitted by the owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PledgeTerms {
    pub amount: u128,
    pub frequency: u32,
    pub duration: u32,
    pub beneficiary: AccountId,
    pub metadata: String,
    pub currency: Currency,
    pub interval: u32,
}

/// The most recent amendment applied to a pledge.
///
/// Overwritten on each amendment — only the latest is retained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PledgeAmendment {
    pub amount: u128,
    pub frequency: u32,
    pub amended_at: Timestamp,
    pub amended_by: AccountId,
}
