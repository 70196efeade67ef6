use crate::commands::{CmdResult, WarehouseSummary};
use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let doc = store.read()?;

    let warehouses = doc
        .warehouses
        .iter()
        .map(|(id, warehouse)| WarehouseSummary {
            id: *id,
            stock_limit: warehouse.stock_limit,
        })
        .collect();

    Ok(CmdResult::default().with_warehouses(warehouses))
}
