//! Storage layer for the marina. Provides:
//! - The boat record and its location ([`Boat`], [`Location`])
//! - The bounded, name-unique boat collection ([`Marina`])
//!
//! Everything lives in memory; persistence is handled by [`crate::ledger`].

mod boat;
mod marina;

pub use boat::{Boat, Location};
pub use marina::Marina;
