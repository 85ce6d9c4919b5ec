//! Domain models for inventory tracking.
//!
//! This module contains the core domain types: stock items, the parsing of
//! user-entered identifiers and quantities, and configuration.

/// Stock item domain model.
pub mod item;
pub use item::Item;

mod config;
pub use config::{CONFIG_FILE, Config, ConfigError};

pub mod validate;
pub use validate::{InvalidIndex, InvalidQuantity, Position};
