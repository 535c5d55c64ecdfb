//! Registry-specific errors.

use thiserror::Error;

/// Failure kinds for registry operations.
///
/// Every failure is deterministic given the same inputs and state; there is
/// no transient category and nothing is retried internally. Each kind maps
/// to a stable numeric code (see [`RegistryError::code`]) so hosts that
/// surface errors as integers keep a fixed ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("caller is not authorized for this operation")]
    NotAuthorized,

    #[error("pledge amount must be positive")]
    InvalidAmount,

    #[error("pledge frequency must be between 1 and 365")]
    InvalidFrequency,

    #[error("pledge duration must be non-negative")]
    InvalidDuration,

    #[error("beneficiary account must be non-empty")]
    InvalidBeneficiary,

    #[error("a pledge with this beneficiary and metadata already exists")]
    PledgeAlreadyExists,

    #[error("pledge not found")]
    PledgeNotFound,

    #[error("registry is at its configured pledge capacity")]
    MaxPledgesExceeded,

    #[error("pledge metadata exceeds 100 characters")]
    InvalidMetadata,

    #[error("unsupported pledge currency")]
    InvalidCurrency,

    #[error("pledge interval must be between 1 and 4320")]
    InvalidInterval,

    #[error("no authority reference has been set")]
    AuthorityNotVerified,

    #[error("pledge is inactive")]
    PledgeInactive,
}

impl RegistryError {
    /// Stable numeric code for the embedding host's ABI.
    pub fn code(&self) -> u16 {
        match self {
            Self::NotAuthorized => 100,
            Self::InvalidAmount => 101,
            Self::InvalidFrequency => 102,
            Self::InvalidDuration => 103,
            Self::InvalidBeneficiary => 104,
            Self::PledgeAlreadyExists => 105,
            Self::PledgeNotFound => 106,
            Self::MaxPledgesExceeded => 110,
            Self::InvalidMetadata => 111,
            Self::InvalidCurrency => 112,
            Self::InvalidInterval => 113,
            Self::AuthorityNotVerified => 114,
            Self::PledgeInactive => 116,
        }
    }
}

/// Uniform amendment failure.
///
/// The amendment preconditions (existence, ownership, active flag, amount
/// and frequency bounds) are deliberately collapsed into one failure signal;
/// callers cannot tell which precondition failed. This coarser granularity
/// is part of the contract, not an omission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("pledge amendment rejected")]
pub struct AmendmentRejected;
