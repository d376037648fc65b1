//! CSV serialization and deserialization utilities.
//!
//! The record file has no header row and no quoting, so every reader and
//! writer here is built with the same dialect.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Builds a headerless reader over the record file dialect.
/// Rows may have differing field counts; short rows fail on deserialize.
pub fn record_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Creates an iterator that reads records from a reader.
/// Each record is deserialized into type T.
pub fn read_csv<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    record_reader(reader).into_deserialize()
}

/// Writes an iterator of records to a writer, without a header row.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{BoatRow, LocationTag};
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_csv() -> csv::Result<()> {
        let input = "Alice,20,slip,5,100.00\n\nBob,15,land,B,50.00\n";
        let rows: Vec<BoatRow> = read_csv(input.as_bytes()).collect::<Result<_, _>>()?;

        let expected_rows = vec![
            BoatRow {
                name: "Alice".to_string(),
                length: 20,
                tag: LocationTag::Slip,
                detail: "5".to_string(),
                amount_owed: dec!(100.00),
            },
            BoatRow {
                name: "Bob".to_string(),
                length: 15,
                tag: LocationTag::Land,
                detail: "B".to_string(),
                amount_owed: dec!(50.00),
            },
        ];
        assert_eq!(rows, expected_rows);

        Ok(())
    }

    #[test]
    fn test_write_csv_two_decimals() -> csv::Result<()> {
        let rows = vec![
            BoatRow {
                name: "Carl".to_string(),
                length: 30,
                tag: LocationTag::Trailer,
                detail: "XYZ123".to_string(),
                amount_owed: dec!(0),
            },
            BoatRow {
                name: "Dory".to_string(),
                length: 12,
                tag: LocationTag::Storage,
                detail: "4".to_string(),
                amount_owed: dec!(134.4),
            },
        ];
        let mut output = Vec::new();
        write_csv(&mut output, rows.into_iter())?;

        let expected = "Carl,30,trailor,XYZ123,0.00\nDory,12,storage,4,134.40\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
        Ok(())
    }
}
