use crate::commands::CmdResult;
use crate::error::{DepotError, Result};
use crate::model::StockEntry;
use crate::store::DocumentStore;
use std::collections::BTreeMap;

pub fn run<S: DocumentStore>(store: &mut S, sku: &str, id: u32, quantity: u32) -> Result<CmdResult> {
    let mut doc = store.read()?;

    let warehouse = doc
        .warehouses
        .get_mut(&id)
        .ok_or(DepotError::WarehouseNotFound(id))?;

    // The stock limit is informational and deliberately not checked here.
    let products = warehouse.products.get_or_insert_with(BTreeMap::new);
    products
        .entry(sku.to_string())
        .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(quantity))
        .or_insert(StockEntry { quantity });

    store.write(&doc)?;
    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn quantity_of(store: &impl DocumentStore, id: u32, sku: &str) -> u32 {
        let doc = store.read().unwrap();
        doc.warehouses[&id].products.as_ref().unwrap()[sku].quantity
    }

    #[test]
    fn first_stock_creates_the_entry() {
        let mut fixture = StoreFixture::new().with_warehouse(1, None);
        run(&mut fixture.store, "W1", 1, 5).unwrap();

        assert_eq!(quantity_of(&fixture.store, 1, "W1"), 5);
    }

    #[test]
    fn stock_is_additive() {
        let mut fixture = StoreFixture::new().with_warehouse(1, None);
        run(&mut fixture.store, "W1", 1, 3).unwrap();
        run(&mut fixture.store, "W1", 1, 4).unwrap();

        assert_eq!(quantity_of(&fixture.store, 1, "W1"), 7);
    }

    #[test]
    fn recreates_an_absent_products_map() {
        let mut fixture = StoreFixture::new().with_bare_warehouse(1);
        run(&mut fixture.store, "W1", 1, 5).unwrap();

        assert_eq!(quantity_of(&fixture.store, 1, "W1"), 5);
    }

    #[test]
    fn can_exceed_the_stock_limit() {
        // The limit is display-only.
        let mut fixture = StoreFixture::new().with_warehouse(1, Some(10));
        run(&mut fixture.store, "W1", 1, 25).unwrap();

        assert_eq!(quantity_of(&fixture.store, 1, "W1"), 25);
    }

    #[test]
    fn unknown_warehouse_leaves_the_document_unchanged() {
        let mut fixture = StoreFixture::new().with_warehouse(1, None);
        let before = fixture.store.read().unwrap();

        let err = run(&mut fixture.store, "W1", 9, 5).unwrap_err();
        assert!(matches!(err, DepotError::WarehouseNotFound(9)));
        assert_eq!(fixture.store.read().unwrap(), before);
    }
}
