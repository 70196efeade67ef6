use crate::commands::CmdResult;
use crate::error::{DepotError, Result};
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, name: &str, sku: &str) -> Result<CmdResult> {
    let mut doc = store.read()?;

    if doc.products.contains_key(sku) {
        return Err(DepotError::DuplicateProduct(sku.to_string()));
    }
    doc.products.insert(sku.to_string(), name.to_string());

    store.write(&doc)?;
    Ok(CmdResult::default())
}
