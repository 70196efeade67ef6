use super::DocumentStore;
use crate::error::Result;
use crate::model::Inventory;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Inventory,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn read(&self) -> Result<Inventory> {
        Ok(self.doc.clone())
    }

    fn write(&mut self, doc: &Inventory) -> Result<()> {
        self.doc = doc.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{StockEntry, Warehouse};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, sku: &str, name: &str) -> Self {
            let mut doc = self.store.read().unwrap();
            doc.products.insert(sku.to_string(), name.to_string());
            self.store.write(&doc).unwrap();
            self
        }

        pub fn with_warehouse(mut self, id: u32, stock_limit: Option<u32>) -> Self {
            let mut doc = self.store.read().unwrap();
            doc.warehouses.insert(id, Warehouse::new(stock_limit));
            self.store.write(&doc).unwrap();
            self
        }

        /// A warehouse whose products map is absent, as in a hand-edited
        /// document.
        pub fn with_bare_warehouse(mut self, id: u32) -> Self {
            let mut doc = self.store.read().unwrap();
            doc.warehouses.insert(
                id,
                Warehouse {
                    stock_limit: None,
                    products: None,
                },
            );
            self.store.write(&doc).unwrap();
            self
        }

        pub fn with_stock(mut self, id: u32, sku: &str, quantity: u32) -> Self {
            let mut doc = self.store.read().unwrap();
            let warehouse = doc
                .warehouses
                .get_mut(&id)
                .expect("fixture warehouse must exist before stocking");
            warehouse
                .products
                .get_or_insert_with(Default::default)
                .insert(sku.to_string(), StockEntry { quantity });
            self.store.write(&doc).unwrap();
            self
        }
    }
}
