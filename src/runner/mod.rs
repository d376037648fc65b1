//! The runner loads the marina from its record file, hands it to an
//! interactive menu session, and writes it back when the session ends.
//!
mod menu;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::MarinaConfig;
use crate::ledger;
use crate::stores::Marina;
use crate::Result;

pub use menu::{write_inventory, Command, Session};

/// Runs one full session against the record file at `path`.
///
/// # Arguments
/// * `path` - The record file, read at startup and overwritten at exit
/// * `input` - Where menu commands come from (e.g. stdin)
/// * `output` - Where prompts and results go (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The record file cannot be opened
/// * Reading `input` or writing `output` fails
///
/// A failed save is reported on `output` and does not fail the run.
pub fn run<P, R, W>(path: P, input: R, mut output: W) -> Result<()>
where
    P: AsRef<Path>,
    R: BufRead,
    W: Write,
{
    let path = path.as_ref();
    let (marina, _warnings) = ledger::load(path, Marina::with_config(MarinaConfig::default()))?;

    let marina = Session::new(marina, input, &mut output).run()?;

    if let Err(err) = ledger::save(path, &marina) {
        tracing::error!(path = %path.display(), "saving marina failed: {}", err);
        writeln!(output, "Error saving '{}': {}", path.display(), err)?;
    }
    writeln!(output, "Exiting the Boat Management System")?;
    Ok(())
}
