use crate::commands::{CmdResult, StockLine};
use crate::error::{DepotError, Result};
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S, id: u32) -> Result<CmdResult> {
    let doc = store.read()?;

    let warehouse = doc
        .warehouses
        .get(&id)
        .ok_or(DepotError::WarehouseNotFound(id))?;

    // Stocked SKUs are a soft reference into the catalog: an uncataloged
    // SKU still lists, just without a name.
    let stock = warehouse
        .products
        .iter()
        .flatten()
        .map(|(sku, entry)| StockLine {
            sku: sku.clone(),
            name: doc.products.get(sku).cloned(),
            quantity: entry.quantity,
        })
        .collect();

    Ok(CmdResult::default().with_stock(stock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_stock_with_catalog_names() {
        let fixture = StoreFixture::new()
            .with_product("W1", "Widget")
            .with_warehouse(1, Some(10))
            .with_stock(1, "W1", 5);

        let result = run(&fixture.store, 1).unwrap();
        assert_eq!(result.stock.len(), 1);
        assert_eq!(result.stock[0].sku, "W1");
        assert_eq!(result.stock[0].name.as_deref(), Some("Widget"));
        assert_eq!(result.stock[0].quantity, 5);
    }

    #[test]
    fn uncataloged_sku_lists_without_a_name() {
        let fixture = StoreFixture::new()
            .with_warehouse(1, None)
            .with_stock(1, "X9", 2);

        let result = run(&fixture.store, 1).unwrap();
        assert_eq!(result.stock[0].name, None);
    }

    #[test]
    fn empty_warehouse_lists_nothing() {
        let fixture = StoreFixture::new().with_warehouse(1, None);
        let result = run(&fixture.store, 1).unwrap();
        assert!(result.stock.is_empty());
    }

    #[test]
    fn absent_products_map_lists_nothing() {
        let fixture = StoreFixture::new().with_bare_warehouse(1);
        let result = run(&fixture.store, 1).unwrap();
        assert!(result.stock.is_empty());
    }

    #[test]
    fn unknown_warehouse_is_reported() {
        let fixture = StoreFixture::new();
        let err = run(&fixture.store, 9).unwrap_err();
        assert!(matches!(err, DepotError::WarehouseNotFound(9)));
    }
}
