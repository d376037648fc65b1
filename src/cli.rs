use clap::Parser;

use crate::config::DATA_FILE_NAME;

#[derive(Parser, Debug, Clone)]
#[command(name = "marina-ledger")]
#[command(about = "Keep track of the boats at a marina and what they owe")]
pub struct Cli {
    /// Record file to load at startup and save on exit (must be BoatData.csv)
    pub data_file: String,
}

impl Cli {
    /// Only the expected record file name is accepted, exactly as typed.
    pub fn validate(&self) -> Result<(), String> {
        if self.data_file != DATA_FILE_NAME {
            return Err(format!("Invalid file '{}', expected {}", self.data_file, DATA_FILE_NAME));
        }
        Ok(())
    }
}
