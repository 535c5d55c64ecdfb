//! The pledge registry — lifecycle of recurring value-transfer commitments.
//!
//! A pledge commits an owner account to recurring transfers toward a
//! beneficiary, gated by a verified authority reference and backed by an
//! escrow deposit. This crate owns the pledge state machine: parameter
//! validation, deduplication via content fingerprints, fee collection and
//! escrow funding side effects, and controlled amendment of live pledges.
//!
//! The registry is evaluated as a strictly sequential state machine: every
//! operation completes synchronously and deterministically from its inputs
//! and current state, and failed operations leave state unchanged. Caller
//! identity and current time are explicit parameters on every operation —
//! nothing is read from ambient context. A host embedding the registry in a
//! multi-threaded environment must serialize access to the whole registry
//! as a single critical section per operation.

pub mod error;
pub mod pledge;
pub mod registry;

pub use error::{AmendmentRejected, RegistryError};
pub use pledge::{Pledge, PledgeAmendment, PledgeTerms};
pub use registry::PledgeRegistry;
