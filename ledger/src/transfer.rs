//! Value transfer trait.

use pledge_types::AccountId;

/// The host ledger's value-transfer primitive, used for the creation fee.
///
/// Same contract as [`crate::EscrowSink`]: the registry issues the transfer
/// and consults no return value; settlement failure handling is the host's
/// responsibility.
pub trait ValueTransfer {
    /// Transfer `amount` (smallest currency unit) from `from` to `to`.
    fn transfer(&mut self, amount: u128, from: &AccountId, to: &AccountId);
}
