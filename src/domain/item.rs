use std::fmt;

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// A single stock record.
///
/// Names are never empty, but they are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Record", into = "Record")]
pub struct Item {
    name: NonEmptyString,
    stock: i64,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub const fn new(name: NonEmptyString, stock: i64) -> Self {
        Self { name, stock }
    }

    /// The display name of the item.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The quantity currently in stock.
    #[must_use]
    pub const fn stock(&self) -> i64 {
        self.stock
    }

    /// Overwrites the quantity in stock.
    pub const fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Stock: {})", self.name, self.stock)
    }
}

/// The on-disk shape of an item.
///
/// Kept separate so that an empty name in the file is rejected at parse time
/// instead of producing an item the rest of the crate cannot represent.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    name: String,
    stock: i64,
}

/// Error returned when a stored item has an empty name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("item name must not be empty")]
pub struct EmptyNameError;

impl TryFrom<Record> for Item {
    type Error = EmptyNameError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let name = NonEmptyString::new(record.name).map_err(|_| EmptyNameError)?;
        Ok(Self::new(name, record.stock))
    }
}

impl From<Item> for Record {
    fn from(item: Item) -> Self {
        Self {
            name: item.name.as_str().to_owned(),
            stock: item.stock,
        }
    }
}
