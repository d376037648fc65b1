pub mod cli;
pub mod config;
mod csv_utils;
mod dto;
mod error;
pub mod ledger;
pub mod logger;
mod runner;
mod stores;

pub use cli::Cli;
pub use config::{MarinaConfig, Rates};
pub use dto::{BoatRow, LocationTag};
pub use error::{MarinaError, Result};
pub use runner::{run, write_inventory, Command, Session};
pub use stores::{Boat, Location, Marina};
