//! Abstract ledger collaborator traits for the pledge protocol.
//!
//! The registry core never talks to a concrete ledger. Fee settlement and
//! escrow funding go through these traits; the embedding host supplies the
//! real implementations. The rest of the codebase depends only on the traits.

pub mod escrow;
pub mod transfer;

pub use escrow::EscrowSink;
pub use transfer::ValueTransfer;
