use super::DocumentStore;
use crate::error::{DepotError, Result};
use crate::model::Inventory;
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn read(&self) -> Result<Inventory> {
        // A store that was never written to reads as the initialized
        // empty document, with both top-level maps present.
        if !self.path.exists() {
            return Ok(Inventory::default());
        }

        let content = fs::read_to_string(&self.path).map_err(DepotError::Io)?;
        serde_json::from_str(&content).map_err(DepotError::Serialization)
    }

    fn write(&mut self, doc: &Inventory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(DepotError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(doc).map_err(DepotError::Serialization)?;
        fs::write(&self.path, content).map_err(DepotError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Warehouse;

    #[test]
    fn missing_file_reads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("inventory.json"));

        let doc = store.read().unwrap();
        assert!(doc.products.is_empty());
        assert!(doc.warehouses.is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("inventory.json"));

        let mut doc = Inventory::default();
        doc.products.insert("W1".to_string(), "Widget".to_string());
        doc.warehouses.insert(1, Warehouse::new(Some(10)));
        store.write(&doc).unwrap();

        assert_eq!(store.read().unwrap(), doc);
    }

    #[test]
    fn write_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("inventory.json");
        let mut store = FileStore::new(path.clone());

        store.write(&Inventory::default()).unwrap();
        assert!(path.exists());
    }
}
