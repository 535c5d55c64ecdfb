//! Fundamental types for the pledge protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account identifiers, pledge identifiers, content fingerprints,
//! currency tags, timestamps, and registry parameters.

pub mod account;
pub mod currency;
pub mod fingerprint;
pub mod id;
pub mod params;
pub mod time;

pub use account::AccountId;
pub use currency::Currency;
pub use fingerprint::PledgeFingerprint;
pub use id::PledgeId;
pub use params::RegistryParams;
pub use time::Timestamp;
