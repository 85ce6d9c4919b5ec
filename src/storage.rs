mod file;
mod listing;
pub mod store;

pub use file::{LoadError, SaveError};
pub use listing::{Entries, Entry, Listing};
pub use store::{InventoryStore, Outcome, Rejection, StoreError};
