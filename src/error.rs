//! Errors for the marina ledger.
//!
//! Most variants are business rule rejections (full marina, duplicate name,
//! bad payment). They abort only the current operation and are reported back
//! to the user through their `Display` text. `SourceUnavailable` is the only
//! one the binary treats as fatal.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("Marina is full (max {capacity} boats).")]
    MarinaFull { capacity: usize },

    #[error("Boat '{0}' already exists!")]
    DuplicateName(String),

    #[error("Malformed boat record: {0}")]
    MalformedRecord(String),

    #[error("Error: Payment amount cannot be negative")]
    NegativeAmount,

    #[error("Payment must be positive amount!")]
    PaymentNotPositive,

    #[error("Payment exceeds amount owed (${owed:.2}).")]
    PaymentExceedsBalance { owed: Decimal },

    #[error("Invalid payment amount '{0}'")]
    InvalidAmount(String),

    #[error("No boat with name '{0}' exists")]
    BoatNotFound(String),

    /// Lookup miss outside of payments; the name is not echoed back.
    #[error("No boat with that name")]
    NoSuchBoat(String),

    #[error("File '{}' not found.", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = MarinaError> = std::result::Result<T, E>;
