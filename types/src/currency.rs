//! Currency tags for pledge commitments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of currencies a pledge can be denominated in.
///
/// Modelled as an enum rather than free-form text so currency handling is
/// exhaustiveness-checked at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// The host ledger's native currency.
    Primary,
    /// The secondary wrapped asset.
    Secondary,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Primary => write!(f, "PRIMARY"),
            Currency::Secondary => write!(f, "SECONDARY"),
        }
    }
}
