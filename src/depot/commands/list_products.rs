use crate::commands::{CatalogEntry, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let doc = store.read()?;

    let entries = doc
        .products
        .into_iter()
        .map(|(sku, name)| CatalogEntry { sku, name })
        .collect();

    Ok(CmdResult::default().with_catalog(entries))
}
