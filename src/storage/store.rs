//! A file backed store of stock items
//!
//! The [`InventoryStore`] is the single owner of the ordered item sequence.
//! Every successful mutation is written to the inventory file before the
//! operation returns.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use non_empty_string::NonEmptyString;

use crate::{
    domain::{
        Item, Position,
        validate::{InvalidIndex, InvalidQuantity, parse_identifier, parse_quantity},
    },
    storage::{
        Listing,
        file::{self, LoadError, SaveError},
    },
};

/// A file backed, ordered collection of stock items.
#[derive(Debug)]
pub struct InventoryStore {
    /// The file the inventory is persisted to.
    path: PathBuf,
    items: Vec<Item>,
    unsaved: bool,
}

impl InventoryStore {
    /// Creates an empty store that persists to `path`.
    ///
    /// Nothing is read from or written to `path` until the first mutation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
            unsaved: false,
        }
    }

    /// Loads the inventory persisted at `path`.
    ///
    /// If the file does not exist, the store starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if its
    /// content is not a valid inventory.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let items = file::read_items(&path)?;
        Ok(Self {
            path,
            items,
            unsaved: false,
        })
    }

    /// Writes the full inventory to the file, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. The in-memory
    /// inventory is unaffected, and the store keeps reporting unsaved changes
    /// until a later save succeeds.
    pub fn save(&mut self) -> Result<(), SaveError> {
        file::write_items(&self.path, &self.items)?;
        self.unsaved = false;
        Ok(())
    }

    /// Appends a new item to the end of the inventory.
    ///
    /// # Errors
    ///
    /// - [`Rejection::NoOp`] if either `name` or `stock` is empty
    /// - [`Rejection::InvalidQuantity`] if `stock` is not an integer
    /// - [`StoreError::Unsaved`] if the item was added but could not be saved
    pub fn add(&mut self, name: &str, stock: &str) -> Result<Outcome, StoreError> {
        if name.is_empty() || stock.is_empty() {
            return Err(reject(Rejection::NoOp));
        }
        let stock = parse_quantity(stock).map_err(|e| reject(e.into()))?;
        let name = NonEmptyString::new(name.to_string()).map_err(|_| reject(Rejection::NoOp))?;

        self.items.push(Item::new(name, stock));
        self.commit(Outcome::Added(Position::from_index(self.items.len() - 1)))
    }

    /// Removes the item with the given 1-based identifier.
    ///
    /// Every later item moves up one position.
    ///
    /// # Errors
    ///
    /// - [`Rejection::InvalidIndex`] if `id` is empty, not an integer, or does
    ///   not name an item
    /// - [`StoreError::Unsaved`] if the item was removed but the inventory
    ///   could not be saved
    pub fn delete(&mut self, id: &str) -> Result<Outcome, StoreError> {
        let position = self.position(id)?;

        self.items.remove(position.index());
        self.commit(Outcome::Deleted(position))
    }

    /// Overwrites the stock of the item with the given 1-based identifier.
    ///
    /// Setting the stock to zero removes the item instead.
    ///
    /// # Errors
    ///
    /// - [`Rejection::InvalidIndex`] if `id` is empty, not an integer, or does
    ///   not name an item
    /// - [`Rejection::MissingQuantity`] if `stock` is empty
    /// - [`Rejection::InvalidQuantity`] if `stock` is not an integer
    /// - [`StoreError::Unsaved`] if the change was made but the inventory
    ///   could not be saved
    pub fn modify_stock(&mut self, id: &str, stock: &str) -> Result<Outcome, StoreError> {
        if id.is_empty() {
            return Err(reject(InvalidIndex::Missing.into()));
        }
        if stock.is_empty() {
            return Err(reject(Rejection::MissingQuantity));
        }
        let position = self.position(id)?;
        let stock = parse_quantity(stock).map_err(|e| reject(e.into()))?;

        let outcome = if stock == 0 {
            self.items.remove(position.index());
            Outcome::Removed(position)
        } else {
            self.items[position.index()].set_stock(stock);
            Outcome::StockUpdated { position, stock }
        };
        self.commit(outcome)
    }

    /// Returns a snapshot of the inventory for display.
    #[must_use]
    pub fn list(&self) -> Listing<'_> {
        Listing::new(&self.items)
    }

    /// The items in inventory order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The number of items in the inventory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the inventory holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The file the inventory is persisted to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the last change could not be saved.
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    fn position(&self, id: &str) -> Result<Position, StoreError> {
        if id.is_empty() {
            return Err(reject(InvalidIndex::Missing.into()));
        }
        parse_identifier(id, self.items.len()).map_err(|e| reject(e.into()))
    }

    fn commit(&mut self, outcome: Outcome) -> Result<Outcome, StoreError> {
        self.unsaved = true;
        match self.save() {
            Ok(()) => {
                tracing::info!("{outcome}");
                Ok(outcome)
            }
            Err(source) => {
                tracing::warn!("{outcome} Change kept in memory: {source}");
                Err(StoreError::Unsaved { outcome, source })
            }
        }
    }
}

fn reject(rejection: Rejection) -> StoreError {
    tracing::debug!("Rejected: {rejection:?}");
    StoreError::Rejected(rejection)
}

/// The result of a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An item was appended at the given position.
    Added(Position),
    /// The item at the given position was deleted.
    Deleted(Position),
    /// The stock of the item at the given position was overwritten.
    StockUpdated {
        /// The item that changed.
        position: Position,
        /// The new quantity.
        stock: i64,
    },
    /// The stock of the item at the given position was set to zero, so the
    /// item was removed.
    Removed(Position),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(position) => write!(f, "Item {position} added."),
            Self::Deleted(position) => write!(f, "Item {position} deleted."),
            Self::StockUpdated { position, .. } => write!(f, "Item {position} stock updated."),
            Self::Removed(position) => write!(f, "Item {position} removed (stock reached zero)."),
        }
    }
}

/// A user-facing reason an operation was not carried out.
///
/// A rejected operation leaves both the inventory and the file untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A required field was left empty when adding an item.
    #[error("Please enter an item name and a stock value.")]
    NoOp,

    /// The item identifier is missing or does not name an item.
    #[error(transparent)]
    InvalidIndex(#[from] InvalidIndex),

    /// No stock quantity was entered.
    #[error("Please enter a new stock number.")]
    MissingQuantity,

    /// The stock quantity is not an integer.
    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantity),
}

/// Errors returned by the mutating operations of an [`InventoryStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The operation was rejected and nothing changed.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The change was made in memory but could not be written to disk.
    #[error("{outcome} The change could not be saved: {source}")]
    Unsaved {
        /// What changed in memory.
        outcome: Outcome,
        /// Why the save failed.
        source: SaveError,
    },
}

impl StoreError {
    /// Returns the rejection, if the operation was rejected.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Unsaved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn setup_temp_store() -> (TempDir, InventoryStore) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("inventory.json");
        (tmp, InventoryStore::load(path).unwrap())
    }

    fn lines(store: &InventoryStore) -> Vec<String> {
        store.list().entries().map(|e| e.to_string()).collect()
    }

    fn names(store: &InventoryStore) -> Vec<&str> {
        store.items().iter().map(Item::name).collect()
    }

    fn rejection(result: Result<Outcome, StoreError>) -> Rejection {
        match result.unwrap_err() {
            StoreError::Rejected(rejection) => rejection,
            other @ StoreError::Unsaved { .. } => panic!("expected rejection, got {other}"),
        }
    }

    #[test]
    fn load_missing_file_starts_empty() {
        let (_tmp, store) = setup_temp_store();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn load_malformed_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        std::fs::write(&path, "{ not json").unwrap();

        let error = InventoryStore::load(&path).unwrap_err();
        assert!(matches!(error, LoadError::Malformed { .. }));
    }

    #[test]
    fn adds_are_listed_in_insertion_order() {
        let (_tmp, mut store) = setup_temp_store();
        for (i, name) in ["Bolt", "Nut", "Washer", "Nut"].iter().enumerate() {
            let outcome = store.add(name, &i.to_string()).unwrap();
            assert_eq!(outcome, Outcome::Added(Position::from_index(i)));
        }

        assert_eq!(store.list().entries().len(), 4);
        assert_eq!(names(&store), ["Bolt", "Nut", "Washer", "Nut"]);
    }

    #[test]
    fn add_persists_before_returning() {
        let (_tmp, mut store) = setup_temp_store();
        store.add("Widget", "5").unwrap();

        let reloaded = InventoryStore::load(store.path()).unwrap();
        assert_eq!(reloaded.items(), store.items());
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn add_with_empty_field_is_noop() {
        let (_tmp, mut store) = setup_temp_store();

        assert_eq!(rejection(store.add("", "5")), Rejection::NoOp);
        assert_eq!(rejection(store.add("Widget", "")), Rejection::NoOp);

        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn add_with_non_numeric_stock_is_rejected() {
        let (_tmp, mut store) = setup_temp_store();
        store.add("Widget", "5").unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        assert_eq!(
            rejection(store.add("Gadget", "lots")),
            Rejection::InvalidQuantity(InvalidQuantity("lots".to_string()))
        );

        assert_eq!(store.len(), 1);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn add_accepts_negative_stock() {
        let (_tmp, mut store) = setup_temp_store();
        store.add("Backorder", "-3").unwrap();
        assert_eq!(store.items()[0].stock(), -3);
    }

    #[test]
    fn delete_removes_exactly_one_item_and_keeps_order() {
        let (_tmp, mut store) = setup_temp_store();
        for name in ["A", "B", "C", "D"] {
            store.add(name, "1").unwrap();
        }

        let outcome = store.delete("2").unwrap();

        assert_eq!(outcome.to_string(), "Item [2] deleted.");
        assert_eq!(names(&store), ["A", "C", "D"]);
        let reloaded = InventoryStore::load(store.path()).unwrap();
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn delete_shifts_identifiers() {
        let (_tmp, mut store) = setup_temp_store();
        for name in ["A", "B", "C"] {
            store.add(name, "1").unwrap();
        }

        store.delete("1").unwrap();
        store.delete("1").unwrap();

        assert_eq!(names(&store), ["C"]);
    }

    #[test]
    fn delete_rejects_invalid_identifiers() {
        let (_tmp, mut store) = setup_temp_store();

        assert_eq!(
            rejection(store.delete("1")),
            Rejection::InvalidIndex(InvalidIndex::OutOfRange { id: 1, len: 0 })
        );

        store.add("Widget", "5").unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        assert_eq!(
            rejection(store.delete("")),
            Rejection::InvalidIndex(InvalidIndex::Missing)
        );
        for id in ["0", "-1", "2", "first"] {
            assert!(matches!(
                rejection(store.delete(id)),
                Rejection::InvalidIndex(_)
            ));
        }

        assert_eq!(store.len(), 1);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn modify_stock_overwrites_quantity() {
        let (_tmp, mut store) = setup_temp_store();
        store.add("Widget", "5").unwrap();
        store.add("Gadget", "1").unwrap();

        let outcome = store.modify_stock("1", "7").unwrap();

        assert_eq!(
            outcome,
            Outcome::StockUpdated {
                position: Position::from_index(0),
                stock: 7
            }
        );
        assert_eq!(outcome.to_string(), "Item [1] stock updated.");
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].stock(), 7);
        assert_eq!(store.items()[1].stock(), 1);
    }

    #[test]
    fn modify_stock_to_zero_is_delete() {
        let (_tmp_a, mut modified) = setup_temp_store();
        let (_tmp_b, mut deleted) = setup_temp_store();
        for store in [&mut modified, &mut deleted] {
            for name in ["A", "B", "C"] {
                store.add(name, "4").unwrap();
            }
        }

        let outcome = modified.modify_stock("2", "0").unwrap();
        deleted.delete("2").unwrap();

        assert_eq!(outcome, Outcome::Removed(Position::from_index(1)));
        assert_eq!(modified.items(), deleted.items());
        // The item that moved into position 2 keeps its stock.
        assert_eq!(modified.items()[1].stock(), 4);
    }

    #[test]
    fn modify_stock_rejections_in_order() {
        let (_tmp, mut store) = setup_temp_store();
        store.add("Widget", "5").unwrap();

        assert_eq!(
            rejection(store.modify_stock("", "")),
            Rejection::InvalidIndex(InvalidIndex::Missing)
        );
        assert_eq!(
            rejection(store.modify_stock("9", "")),
            Rejection::MissingQuantity
        );
        assert_eq!(
            rejection(store.modify_stock("9", "x")),
            Rejection::InvalidIndex(InvalidIndex::OutOfRange { id: 9, len: 1 })
        );
        assert_eq!(
            rejection(store.modify_stock("1", "x")),
            Rejection::InvalidQuantity(InvalidQuantity("x".to_string()))
        );

        assert_eq!(store.items()[0].stock(), 5);
    }

    #[test]
    fn save_then_load_reproduces_sequence() {
        let (_tmp, mut store) = setup_temp_store();
        store.add("Widget", "5").unwrap();
        store.add("Widget", "0").unwrap();
        store.add("Sprocket", "-2").unwrap();
        store.save().unwrap();

        let reloaded = InventoryStore::load(store.path()).unwrap();

        assert_eq!(reloaded.items(), store.items());
        assert_eq!(lines(&reloaded), lines(&store));
    }

    #[test]
    fn failed_save_keeps_change_in_memory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data");
        let mut store = InventoryStore::new(dir.join("inventory.json"));

        let error = store.add("Widget", "5").unwrap_err();

        assert!(matches!(
            error,
            StoreError::Unsaved {
                outcome: Outcome::Added(_),
                ..
            }
        ));
        assert!(error.rejection().is_none());
        assert_eq!(store.len(), 1);
        assert!(store.has_unsaved_changes());

        std::fs::create_dir(&dir).unwrap();
        store.save().unwrap();

        assert!(!store.has_unsaved_changes());
        let reloaded = InventoryStore::load(store.path()).unwrap();
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn widget_gadget_scenario() {
        let (_tmp, mut store) = setup_temp_store();

        store.add("Widget", "5").unwrap();
        assert_eq!(lines(&store), ["[1] Widget (Stock: 5)"]);

        store.add("Gadget", "0").unwrap();
        assert_eq!(
            lines(&store),
            ["[1] Widget (Stock: 5)", "[2] Gadget (Stock: 0)"]
        );

        store.modify_stock("2", "0").unwrap();
        assert_eq!(lines(&store), ["[1] Widget (Stock: 5)"]);

        store.delete("1").unwrap();
        assert!(store.list().is_empty());
        assert_eq!(store.list().to_string(), "No items in inventory.");
    }
}
