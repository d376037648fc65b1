use rust_decimal::Decimal;

/// Where a boat is kept, with the detail that only makes sense for that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Slip(u32),
    Land(char),
    Trailer(String),
    Storage(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub name: String,
    /// Length in feet.
    pub length: u32,
    pub location: Location,
    pub amount_owed: Decimal,
}

impl Boat {
    /// Case-insensitive name comparison, used for every lookup in the marina.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Lowercased name, the key for sorted listings.
    pub fn sort_key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}
