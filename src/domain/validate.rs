//! Parsing of raw user text into identifiers and quantities.
//!
//! These helpers are pure. Checking for empty input is left to the caller so
//! that each field can report its own message.

use std::{fmt, num::NonZeroUsize};

/// A 1-based positional identifier into the current inventory.
///
/// Positions are not stable: deleting an item shifts every later item down
/// by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(NonZeroUsize);

impl Position {
    /// Creates a position from a 1-based identifier.
    #[must_use]
    pub const fn new(id: NonZeroUsize) -> Self {
        Self(id)
    }

    /// The identifier shown to the user.
    #[must_use]
    pub const fn id(self) -> usize {
        self.0.get()
    }

    /// The 0-based index into the underlying sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() - 1
    }

    /// The position of the item stored at a 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// The reasons an item identifier can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIndex {
    /// No identifier was entered.
    #[error("Please enter an item ID.")]
    Missing,

    /// The identifier is not an integer.
    #[error("Invalid item ID.")]
    NotANumber(String),

    /// The identifier does not name an item in the current inventory.
    #[error("Invalid item ID.")]
    OutOfRange {
        /// The identifier that was entered.
        id: i64,
        /// The number of items at the time of the check.
        len: usize,
    },
}

/// Error returned when a stock quantity is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid stock value.")]
pub struct InvalidQuantity(pub String);

/// Parses a 1-based item identifier and checks it against `len`.
///
/// # Errors
///
/// Returns [`InvalidIndex::NotANumber`] if `text` is not an integer, and
/// [`InvalidIndex::OutOfRange`] if it is below 1 or above `len`.
pub fn parse_identifier(text: &str, len: usize) -> Result<Position, InvalidIndex> {
    let id: i64 = text
        .parse()
        .map_err(|_| InvalidIndex::NotANumber(text.to_string()))?;

    usize::try_from(id)
        .ok()
        .filter(|&id| id <= len)
        .and_then(NonZeroUsize::new)
        .map(Position::new)
        .ok_or(InvalidIndex::OutOfRange { id, len })
}

/// Parses a stock quantity.
///
/// Negative quantities are accepted.
///
/// # Errors
///
/// Returns [`InvalidQuantity`] if `text` is not an integer.
pub fn parse_quantity(text: &str) -> Result<i64, InvalidQuantity> {
    text.parse().map_err(|_| InvalidQuantity(text.to_string()))
}
