use rust_decimal::Decimal;

use crate::config::MarinaConfig;
use crate::csv_utils::read_csv;
use crate::dto::BoatRow;
use crate::stores::Boat;
use crate::{MarinaError, Result};

/// The boat collection. Boats are kept in insertion order; sorting only
/// happens in [`Marina::list_sorted`].
#[derive(Debug, Default)]
pub struct Marina {
    boats: Vec<Boat>,
    config: MarinaConfig,
}

impl Marina {
    pub fn new() -> Self {
        Self::with_config(MarinaConfig::default())
    }

    pub fn with_config(config: MarinaConfig) -> Self {
        Self {
            boats: Vec::with_capacity(config.capacity),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn is_full(&self) -> bool {
        self.boats.len() >= self.config.capacity
    }

    pub fn exists(&self, name: &str) -> bool {
        self.boats.iter().any(|boat| boat.is_named(name))
    }

    pub fn get(&self, name: &str) -> Option<&Boat> {
        self.boats.iter().find(|boat| boat.is_named(name))
    }

    /// Inserts an already parsed boat, enforcing capacity and name uniqueness.
    pub fn insert(&mut self, boat: Boat) -> Result<()> {
        if self.is_full() {
            return Err(MarinaError::MarinaFull {
                capacity: self.config.capacity,
            });
        }
        if self.exists(&boat.name) {
            return Err(MarinaError::DuplicateName(boat.name));
        }
        self.boats.push(boat);
        Ok(())
    }

    /// Parses a single `name,length,tag,detail,amount_owed` record and adds it.
    /// Nothing changes on rejection.
    pub fn add(&mut self, record: &str) -> Result<()> {
        if self.is_full() {
            return Err(MarinaError::MarinaFull {
                capacity: self.config.capacity,
            });
        }
        let row: BoatRow = read_csv(record.as_bytes())
            .next()
            .ok_or_else(|| MarinaError::MalformedRecord("empty record".to_string()))?
            .map_err(|err| MarinaError::MalformedRecord(err.to_string()))?;
        let boat = Boat::try_from(row)?;
        if self.exists(&boat.name) {
            return Err(MarinaError::DuplicateName(boat.name));
        }
        if boat.amount_owed < Decimal::ZERO {
            return Err(MarinaError::NegativeAmount);
        }
        let name = boat.name.clone();
        self.insert(boat)?;
        tracing::info!(%name, "boat added");
        Ok(())
    }

    /// Removes a boat by name, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Result<Boat> {
        let index = self
            .boats
            .iter()
            .position(|boat| boat.is_named(name))
            .ok_or_else(|| MarinaError::NoSuchBoat(name.to_string()))?;
        let boat = self.boats.remove(index);
        tracing::info!(name = %boat.name, "boat removed");
        Ok(boat)
    }

    /// Applies a payment and returns the remaining balance.
    /// Only accepted when `0 < amount <= amount_owed`.
    pub fn pay(&mut self, name: &str, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(MarinaError::PaymentNotPositive);
        }
        let boat = self
            .boats
            .iter_mut()
            .find(|boat| boat.is_named(name))
            .ok_or_else(|| MarinaError::BoatNotFound(name.to_string()))?;
        if amount > boat.amount_owed {
            return Err(MarinaError::PaymentExceedsBalance {
                owed: boat.amount_owed,
            });
        }
        boat.amount_owed -= amount;
        tracing::info!(name = %boat.name, %amount, balance = %boat.amount_owed, "payment accepted");
        Ok(boat.amount_owed)
    }

    /// Bills every boat one month of storage at its location's rate.
    pub fn apply_monthly_charges(&mut self) {
        let rates = self.config.rates;
        for boat in &mut self.boats {
            boat.amount_owed += Decimal::from(boat.length) * rates.for_location(&boat.location);
        }
        tracing::info!(boats = self.boats.len(), "monthly charges applied");
    }

    /// Boats ordered by name, case-insensitive ascending.
    pub fn list_sorted(&self) -> Vec<&Boat> {
        let mut sorted: Vec<&Boat> = self.boats.iter().collect();
        sorted.sort_by_cached_key(|boat| boat.sort_key());
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Boat> {
        self.boats.iter()
    }
}
