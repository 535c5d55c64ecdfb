//! Nullable ledger rails for deterministic testing.
//!
//! The registry's only external dependencies are the ledger traits; this
//! crate provides implementations that record every call for assertions
//! instead of settling anything. Time never needs a double — the registry
//! takes timestamps as explicit parameters, so tests construct them
//! directly.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod rails;

pub use rails::{DepositRecord, NullEscrow, NullRail, TransferRecord};
