//! Nullable ledger rails — record transfers and deposits without settling them.

use pledge_ledger::{EscrowSink, ValueTransfer};
use pledge_types::AccountId;

/// A fee transfer recorded by [`NullRail`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u128,
    pub from: AccountId,
    pub to: AccountId,
}

/// An escrow deposit recorded by [`NullEscrow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositRecord {
    pub holding: AccountId,
    pub from: AccountId,
    pub amount: u128,
}

/// A value-transfer rail that records transfers instead of settling them.
#[derive(Debug, Default)]
pub struct NullRail {
    transfers: Vec<TransferRecord>,
}

impl NullRail {
    pub fn new() -> Self {
        Self::default()
    }

    /// All transfers issued so far (for assertions).
    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }
}

impl ValueTransfer for NullRail {
    fn transfer(&mut self, amount: u128, from: &AccountId, to: &AccountId) {
        self.transfers.push(TransferRecord {
            amount,
            from: from.clone(),
            to: to.clone(),
        });
    }
}

/// An escrow sink that records deposits instead of holding funds.
#[derive(Debug, Default)]
pub struct NullEscrow {
    deposits: Vec<DepositRecord>,
}

impl NullEscrow {
    pub fn new() -> Self {
        Self::default()
    }

    /// All deposits received so far (for assertions).
    pub fn deposits(&self) -> &[DepositRecord] {
        &self.deposits
    }
}

impl EscrowSink for NullEscrow {
    fn deposit(&mut self, holding: &AccountId, from: &AccountId, amount: u128) {
        self.deposits.push(DepositRecord {
            holding: holding.clone(),
            from: from.clone(),
            amount,
        });
    }
}
