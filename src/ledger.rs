//! Loading and saving the marina to its record file.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::csv_utils::{read_csv, write_csv};
use crate::dto::BoatRow;
use crate::stores::{Boat, Marina};
use crate::{MarinaError, Result};

/// Loads a marina from the record file at `path`.
///
/// # Errors
/// Returns [`MarinaError::SourceUnavailable`] if the file cannot be opened.
/// Problems with individual lines never fail the load; see [`load_from_reader`].
pub fn load<P: AsRef<Path>>(path: P, marina: Marina) -> Result<(Marina, Vec<MarinaError>)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MarinaError::SourceUnavailable {
        path: path.to_owned(),
        source,
    })?;
    let loaded = load_from_reader(file, marina);
    tracing::info!(path = %path.display(), boats = loaded.0.len(), "marina loaded");
    Ok(loaded)
}

/// Reads records into `marina` until input or capacity runs out.
///
/// Malformed lines are skipped. Duplicate names keep the first occurrence and
/// are returned as warnings, as is running out of capacity with input left.
pub fn load_from_reader<R: Read>(reader: R, mut marina: Marina) -> (Marina, Vec<MarinaError>) {
    let mut warnings = Vec::new();
    let mut rows = read_csv::<BoatRow, _>(reader).peekable();

    while rows.peek().is_some() {
        if marina.is_full() {
            let warning = MarinaError::MarinaFull {
                capacity: marina.capacity(),
            };
            tracing::warn!("{}; remaining records ignored", warning);
            warnings.push(warning);
            break;
        }
        let Some(row) = rows.next() else { break };
        let boat = match row {
            Ok(row) => match Boat::try_from(row) {
                Ok(boat) => boat,
                Err(err) => {
                    tracing::debug!("skipping record: {}", err);
                    continue;
                }
            },
            Err(err) => {
                tracing::debug!("skipping record: {}", err);
                continue;
            }
        };
        if let Err(err) = marina.insert(boat) {
            tracing::warn!("{}", err);
            warnings.push(err);
        }
    }

    (marina, warnings)
}

/// Overwrites the record file at `path` with the marina, sorted by name.
///
/// The file is synced before it is closed so a failed write-back surfaces
/// here instead of being lost on drop.
pub fn save<P: AsRef<Path>>(path: P, marina: &Marina) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    save_to_writer(&mut writer, marina)?;
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    tracing::info!(path = %path.display(), boats = marina.len(), "marina saved");
    Ok(())
}

pub fn save_to_writer<W: Write>(writer: W, marina: &Marina) -> Result<()> {
    let rows = marina.list_sorted().into_iter().map(BoatRow::from);
    write_csv(writer, rows)?;
    Ok(())
}
