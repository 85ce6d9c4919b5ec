//! Terminal inventory tracking
//!
//! Stock items are kept in an ordered list and persisted to a JSON file after
//! every change.

pub mod domain;
pub use domain::{CONFIG_FILE, Config, ConfigError, InvalidIndex, InvalidQuantity, Item, Position};

/// File backed storage of the inventory.
pub mod storage;
pub use storage::{InventoryStore, Listing, LoadError, Outcome, Rejection, SaveError, StoreError};
