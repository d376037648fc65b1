use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{MAX_NAME_LEN, MAX_TAG_LEN};
use crate::stores::{Boat, Location};
use crate::MarinaError;

/// Location tag as it appears in the record file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LocationTag {
    Slip,
    Land,
    // Legacy spelling kept so existing files still load.
    #[serde(rename = "trailor")]
    Trailer,
    Storage,
}

/// One line of the record file: `name,length,tag,detail,amount_owed`.
/// The detail column is kept raw until the tag says how to read it.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BoatRow {
    pub name: String,
    pub length: u32,
    pub tag: LocationTag,
    pub detail: String,
    #[serde(
        serialize_with = "serialize_decimal_2dp",
        deserialize_with = "deserialize_decimal_exact"
    )]
    pub amount_owed: Decimal,
}

/// Parses the raw field text so amounts never pass through a float.
fn deserialize_decimal_exact<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str(&raw).map_err(de::Error::custom)
}

fn serialize_decimal_2dp<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:.2}", amount))
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

impl TryFrom<BoatRow> for Boat {
    type Error = MarinaError;

    fn try_from(row: BoatRow) -> Result<Self, Self::Error> {
        if row.name.is_empty() {
            return Err(MarinaError::MalformedRecord("missing name".to_string()));
        }
        let malformed_detail = || {
            MarinaError::MalformedRecord(format!("invalid {:?} detail '{}'", row.tag, row.detail))
        };
        let location = match row.tag {
            LocationTag::Slip => {
                Location::Slip(row.detail.parse().map_err(|_| malformed_detail())?)
            }
            LocationTag::Land => {
                Location::Land(row.detail.chars().next().ok_or_else(malformed_detail)?)
            }
            LocationTag::Trailer if row.detail.is_empty() => return Err(malformed_detail()),
            LocationTag::Trailer => Location::Trailer(truncate_chars(&row.detail, MAX_TAG_LEN)),
            LocationTag::Storage => {
                Location::Storage(row.detail.parse().map_err(|_| malformed_detail())?)
            }
        };
        Ok(Boat {
            name: truncate_chars(&row.name, MAX_NAME_LEN),
            length: row.length,
            location,
            amount_owed: row.amount_owed,
        })
    }
}

impl From<&Boat> for BoatRow {
    fn from(boat: &Boat) -> Self {
        let (tag, detail) = match &boat.location {
            Location::Slip(number) => (LocationTag::Slip, number.to_string()),
            Location::Land(bay) => (LocationTag::Land, bay.to_string()),
            Location::Trailer(tag) => (LocationTag::Trailer, tag.clone()),
            Location::Storage(number) => (LocationTag::Storage, number.to_string()),
        };
        Self {
            name: boat.name.clone(),
            length: boat.length,
            tag,
            detail,
            amount_owed: boat.amount_owed,
        }
    }
}
