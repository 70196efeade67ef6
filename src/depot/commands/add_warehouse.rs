use crate::commands::CmdResult;
use crate::error::{DepotError, Result};
use crate::model::Warehouse;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, id: u32, stock_limit: Option<u32>) -> Result<CmdResult> {
    let mut doc = store.read()?;

    // Overwriting would silently discard the warehouse's stock.
    if doc.warehouses.contains_key(&id) {
        return Err(DepotError::DuplicateWarehouse(id));
    }
    doc.warehouses.insert(id, Warehouse::new(stock_limit));

    store.write(&doc)?;
    Ok(CmdResult::default())
}
