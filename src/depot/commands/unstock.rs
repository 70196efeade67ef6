use crate::commands::CmdResult;
use crate::error::{DepotError, Result};
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, sku: &str, id: u32, quantity: u32) -> Result<CmdResult> {
    let mut doc = store.read()?;

    let warehouse = doc
        .warehouses
        .get_mut(&id)
        .ok_or(DepotError::WarehouseNotFound(id))?;
    let products = warehouse.products.as_mut().ok_or(DepotError::NoStock(id))?;
    let entry = products
        .get_mut(sku)
        .ok_or_else(|| DepotError::ProductNotStocked {
            sku: sku.to_string(),
            warehouse: id,
        })?;

    // Quantities never go negative.
    entry.quantity = entry.quantity.saturating_sub(quantity);

    store.write(&doc)?;
    Ok(CmdResult::default())
}
