//! Fixed limits and billing rates for the marina.

use rust_decimal::Decimal;

use crate::stores::Location;

/// The only record file name the binary accepts.
pub const DATA_FILE_NAME: &str = "BoatData.csv";

pub const DEFAULT_CAPACITY: usize = 120;

/// Names longer than this are truncated on parse.
pub const MAX_NAME_LEN: usize = 127;

/// Trailer license tags longer than this are truncated on parse.
pub const MAX_TAG_LEN: usize = 7;

/// Monthly storage rates, charged per foot of boat length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub slip: Decimal,
    pub land: Decimal,
    pub trailer: Decimal,
    pub storage: Decimal,
}

impl Rates {
    pub fn for_location(&self, location: &Location) -> Decimal {
        match location {
            Location::Slip(_) => self.slip,
            Location::Land(_) => self.land,
            Location::Trailer(_) => self.trailer,
            Location::Storage(_) => self.storage,
        }
    }
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            slip: Decimal::new(1250, 2),
            land: Decimal::new(1400, 2),
            trailer: Decimal::new(2500, 2),
            storage: Decimal::new(1120, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarinaConfig {
    pub capacity: usize,
    pub rates: Rates,
}

impl Default for MarinaConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            rates: Rates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rates() {
        let rates = Rates::default();
        assert_eq!(rates.for_location(&Location::Slip(1)), dec!(12.50));
        assert_eq!(rates.for_location(&Location::Land('A')), dec!(14.00));
        assert_eq!(
            rates.for_location(&Location::Trailer("ABC".to_string())),
            dec!(25.00)
        );
        assert_eq!(rates.for_location(&Location::Storage(3)), dec!(11.20));
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(MarinaConfig::default().capacity, 120);
    }
}
