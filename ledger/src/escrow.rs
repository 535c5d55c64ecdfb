//! Escrow sink trait.

use pledge_types::AccountId;

/// An external escrow service that holds the deposits backing pledges.
///
/// `holding` is the escrow account to credit; the registry always passes
/// the holding reference it was initialized with, so one implementation can
/// serve several registries. The registry treats every deposit as
/// unconditionally successful and consults no return value. A host whose
/// escrow can fail must make the deposit atomic with the registry's state
/// commit.
pub trait EscrowSink {
    /// Deposit `amount` (smallest currency unit) from `from` into `holding`.
    fn deposit(&mut self, holding: &AccountId, from: &AccountId, amount: u128);
}
