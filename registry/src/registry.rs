//! The pledge registry state machine.

use std::collections::HashMap;

use pledge_ledger::{EscrowSink, ValueTransfer};
use pledge_types::{AccountId, PledgeFingerprint, PledgeId, RegistryParams, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AmendmentRejected, RegistryError};
use crate::pledge::{
    Pledge, PledgeAmendment, PledgeTerms, MAX_FREQUENCY, MAX_INTERVAL, MAX_METADATA_CHARS,
};

/// The pledge registry — owns all pledge state.
///
/// One instance per host; no ambient or static state. Failed operations
/// leave the registry unchanged (no partial writes).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PledgeRegistry {
    params: RegistryParams,
    /// Trust anchor for fee collection. Bound exactly once; never changed.
    authority: Option<AccountId>,
    /// Reference to the external escrow holding, fixed at initialization.
    escrow: AccountId,
    /// Next identifier to allocate; equals total pledges ever created.
    next_id: u64,
    pledges: HashMap<PledgeId, Pledge>,
    /// Latest amendment per pledge; overwritten on each amendment.
    amendments: HashMap<PledgeId, PledgeAmendment>,
    /// Append-only: fingerprints are never released, even for pledges that
    /// later become inactive.
    by_fingerprint: HashMap<PledgeFingerprint, PledgeId>,
}

impl PledgeRegistry {
    /// Create a registry with protocol-default parameters.
    pub fn new(escrow: AccountId) -> Self {
        Self::with_params(escrow, RegistryParams::default())
    }

    pub fn with_params(escrow: AccountId, params: RegistryParams) -> Self {
        Self {
            params,
            authority: None,
            escrow,
            next_id: 0,
            pledges: HashMap::new(),
            amendments: HashMap::new(),
            by_fingerprint: HashMap::new(),
        }
    }

    /// Bind the authority reference, permanently.
    ///
    /// Fails if `candidate` equals the caller (self-authorization is
    /// forbidden) or if an authority is already bound. The reference can
    /// never be changed afterwards — it is the trust anchor for fee
    /// collection, bound exactly once to prevent later takeover.
    pub fn set_authority(
        &mut self,
        caller: &AccountId,
        candidate: AccountId,
    ) -> Result<(), RegistryError> {
        if &candidate == caller {
            return Err(RegistryError::NotAuthorized);
        }
        if self.authority.is_some() {
            return Err(RegistryError::NotAuthorized);
        }
        info!(authority = %candidate, "authority reference bound");
        self.authority = Some(candidate);
        Ok(())
    }

    /// Replace the configured creation fee.
    ///
    /// Requires an authority reference to exist. The core deliberately does
    /// not check the caller's identity here — narrowing access to the
    /// authority account is a policy decision left to the host.
    pub fn set_creation_fee(&mut self, new_fee: u128) -> Result<(), RegistryError> {
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotVerified);
        }
        debug!(fee = new_fee, "creation fee changed");
        self.params.creation_fee = new_fee;
        Ok(())
    }

    /// Create a new pledge owned by `caller`.
    ///
    /// Validation order is part of the contract — the first failing check
    /// determines which error the caller sees: capacity, amount, frequency,
    /// duration, beneficiary, metadata, currency, interval, authority
    /// presence, fingerprint uniqueness. `duration` and `currency` are
    /// discharged statically by their types.
    ///
    /// On success the configured creation fee is transferred from the caller
    /// to the authority and `terms.amount` is deposited into the escrow
    /// holding fixed at initialization, in that order and before the state
    /// write. Neither outcome is consulted; the host must guarantee both
    /// legs settle atomically with this commit.
    pub fn create_pledge<R, E>(
        &mut self,
        caller: &AccountId,
        now: Timestamp,
        terms: PledgeTerms,
        rail: &mut R,
        escrow: &mut E,
    ) -> Result<PledgeId, RegistryError>
    where
        R: ValueTransfer + ?Sized,
        E: EscrowSink + ?Sized,
    {
        if self.next_id >= self.params.max_pledges {
            return Err(RegistryError::MaxPledgesExceeded);
        }
        if terms.amount == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        if terms.frequency == 0 || terms.frequency > MAX_FREQUENCY {
            return Err(RegistryError::InvalidFrequency);
        }
        if terms.beneficiary.is_empty() {
            return Err(RegistryError::InvalidBeneficiary);
        }
        if terms.metadata.chars().count() > MAX_METADATA_CHARS {
            return Err(RegistryError::InvalidMetadata);
        }
        if terms.interval == 0 || terms.interval > MAX_INTERVAL {
            return Err(RegistryError::InvalidInterval);
        }
        let authority = self
            .authority
            .clone()
            .ok_or(RegistryError::AuthorityNotVerified)?;
        let fingerprint = PledgeFingerprint::derive(&terms.beneficiary, &terms.metadata);
        if self.by_fingerprint.contains_key(&fingerprint) {
            return Err(RegistryError::PledgeAlreadyExists);
        }

        rail.transfer(self.params.creation_fee, caller, &authority);
        escrow.deposit(&self.escrow, caller, terms.amount);

        let id = PledgeId::new(self.next_id);
        let pledge = Pledge {
            owner: caller.clone(),
            amount: terms.amount,
            frequency: terms.frequency,
            duration: terms.duration,
            beneficiary: terms.beneficiary,
            active: true,
            created_at: now,
            metadata: terms.metadata,
            currency: terms.currency,
            interval: terms.interval,
            executions: 0,
        };
        self.pledges.insert(id, pledge);
        self.by_fingerprint.insert(fingerprint, id);
        self.next_id += 1;
        debug!(pledge = %id, owner = %caller, "pledge created");
        Ok(id)
    }

    /// Look up a pledge by identifier.
    pub fn get_pledge(&self, id: PledgeId) -> Result<&Pledge, RegistryError> {
        self.pledges.get(&id).ok_or(RegistryError::PledgeNotFound)
    }

    /// Amend a live pledge's amount and frequency.
    ///
    /// Preconditions, checked in order: the pledge exists, `caller` is its
    /// owner, the pledge is active, `new_amount` > 0, and `new_frequency` is
    /// in 1..=365. All failures collapse to [`AmendmentRejected`].
    ///
    /// On success the stored pledge's amount and frequency are replaced,
    /// `created_at` is re-stamped to `now`, and the pledge's single
    /// amendment record is overwritten.
    pub fn update_pledge(
        &mut self,
        caller: &AccountId,
        now: Timestamp,
        id: PledgeId,
        new_amount: u128,
        new_frequency: u32,
    ) -> Result<(), AmendmentRejected> {
        let pledge = self.pledges.get_mut(&id).ok_or(AmendmentRejected)?;
        if &pledge.owner != caller {
            return Err(AmendmentRejected);
        }
        if !pledge.active {
            return Err(AmendmentRejected);
        }
        if new_amount == 0 {
            return Err(AmendmentRejected);
        }
        if new_frequency == 0 || new_frequency > MAX_FREQUENCY {
            return Err(AmendmentRejected);
        }

        pledge.amount = new_amount;
        pledge.frequency = new_frequency;
        pledge.created_at = now;
        self.amendments.insert(
            id,
            PledgeAmendment {
                amount: new_amount,
                frequency: new_frequency,
                amended_at: now,
                amended_by: caller.clone(),
            },
        );
        debug!(pledge = %id, owner = %caller, "pledge amended");
        Ok(())
    }

    /// Flag a pledge inactive.
    ///
    /// Host hook for whatever machinery ends a pledge (completed duration,
    /// owner cancellation, ...). The pledge's fingerprint stays claimed, so
    /// the same beneficiary + metadata pair can never be reused.
    pub fn deactivate_pledge(&mut self, id: PledgeId) -> Result<(), RegistryError> {
        let pledge = self.pledges.get_mut(&id).ok_or(RegistryError::PledgeNotFound)?;
        if !pledge.active {
            return Err(RegistryError::PledgeInactive);
        }
        pledge.active = false;
        info!(pledge = %id, "pledge deactivated");
        Ok(())
    }

    /// Record one execution of a live pledge, returning the new count.
    ///
    /// Pure bookkeeping: the host's disbursement machinery decides when an
    /// execution actually happened; the registry only counts.
    pub fn record_execution(&mut self, id: PledgeId) -> Result<u64, RegistryError> {
        let pledge = self.pledges.get_mut(&id).ok_or(RegistryError::PledgeNotFound)?;
        if !pledge.active {
            return Err(RegistryError::PledgeInactive);
        }
        pledge.executions += 1;
        Ok(pledge.executions)
    }

    /// The latest amendment record for a pledge, if it was ever amended.
    pub fn get_amendment(&self, id: PledgeId) -> Option<&PledgeAmendment> {
        self.amendments.get(&id)
    }

    /// Total pledges ever created, active or not.
    pub fn pledge_count(&self) -> u64 {
        self.next_id
    }

    /// Whether a fingerprint is already claimed by some pledge.
    pub fn fingerprint_exists(&self, fingerprint: &PledgeFingerprint) -> bool {
        self.by_fingerprint.contains_key(fingerprint)
    }

    /// The bound authority reference, if any.
    pub fn authority(&self) -> Option<&AccountId> {
        self.authority.as_ref()
    }

    /// The currently configured creation fee.
    pub fn creation_fee(&self) -> u128 {
        self.params.creation_fee
    }

    /// The configured maximum live pledge count.
    pub fn max_pledges(&self) -> u64 {
        self.params.max_pledges
    }

    /// The escrow holding reference fixed at initialization.
    pub fn escrow_sink(&self) -> &AccountId {
        &self.escrow
    }

    /// Serialize the full registry state for host-side persistence.
    pub fn save_state(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    /// Restore a registry from bytes produced by [`Self::save_state`].
    pub fn load_state(data: &[u8]) -> Option<Self> {
        bincode::deserialize(data).ok()
    }
}
