//! Reading and writing the inventory file.
//!
//! The file holds a JSON array of `{"name": ..., "stock": ...}` objects
//! written with two-space indentation.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::domain::Item;

/// Errors that can occur when loading the inventory file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file exists but could not be read.
    #[error("Error reading inventory file {}: {source}", path.display())]
    Read {
        /// The inventory file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file was read but does not contain a valid inventory.
    #[error("Inventory file {} is malformed: {source}", path.display())]
    Malformed {
        /// The inventory file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Errors that can occur when writing the inventory file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The inventory could not be serialized.
    #[error("Error saving inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The file could not be written.
    #[error("Error saving inventory to {}: {source}", path.display())]
    Write {
        /// The inventory file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Reads the items stored at `path`.
///
/// A missing file, or one holding only whitespace, is an empty inventory.
pub fn read_items(path: &Path) -> Result<Vec<Item>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No inventory file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        tracing::debug!("Inventory file {} is empty", path.display());
        return Ok(Vec::new());
    }

    let items: Vec<Item> =
        serde_json::from_str(&content).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Writes `items` to `path`, replacing whatever was there.
pub fn write_items(path: &Path, items: &[Item]) -> Result<(), SaveError> {
    let content = serde_json::to_string_pretty(items)?;

    std::fs::write(path, content).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Saved {} items to {}", items.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use non_empty_string::NonEmptyString;
    use tempfile::TempDir;

    use super::*;

    fn item(name: &str, stock: i64) -> Item {
        Item::new(NonEmptyString::new(name.to_string()).unwrap(), stock)
    }

    #[test]
    fn missing_file_is_empty_inventory() {
        let tmp = TempDir::new().unwrap();
        let items = read_items(&tmp.path().join("inventory.json")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn blank_file_is_empty_inventory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        std::fs::write(&path, "  \n").unwrap();

        assert!(read_items(&path).unwrap().is_empty());
    }

    #[test]
    fn writes_two_space_indented_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");

        write_items(&path, &[item("Widget", 5), item("Gadget", 0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"name\": \"Widget\",\n    \"stock\": 5\n  },\n  {\n    \"name\": \
             \"Gadget\",\n    \"stock\": 0\n  }\n]"
        );
    }

    #[test]
    fn reads_what_was_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        let items = vec![item("Widget", 5), item("Widget", -1), item("Bolt", 300)];

        write_items(&path, &items).unwrap();

        assert_eq!(read_items(&path).unwrap(), items);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        std::fs::write(&path, r#"[{"name": "Widget", "stock": 5}, {"name": "#).unwrap();

        let error = read_items(&path).unwrap_err();
        assert!(matches!(error, LoadError::Malformed { .. }));
    }

    #[test]
    fn empty_name_in_file_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        std::fs::write(&path, r#"[{"name": "", "stock": 5}]"#).unwrap();

        let error = read_items(&path).unwrap_err();
        assert!(matches!(error, LoadError::Malformed { .. }));
    }

    #[test]
    fn directory_in_place_of_file_is_read_error() {
        let tmp = TempDir::new().unwrap();

        let error = read_items(tmp.path()).unwrap_err();
        assert!(matches!(error, LoadError::Read { .. }));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("inventory.json");

        let error = write_items(&path, &[item("Widget", 5)]).unwrap_err();
        assert!(matches!(error, SaveError::Write { .. }));
    }
}
