//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all depot operations, regardless of the UI
//! driving them.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or prompting
//! - **Presentation concerns**: it returns data structures, not strings
//!
//! ## Generic Over DocumentStore
//!
//! `DepotApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `DepotApi<FileStore>`
//! - Testing: `DepotApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DocumentStore;

/// The main API facade for depot operations.
///
/// All UI clients should interact through this API.
pub struct DepotApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> DepotApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_product(&mut self, name: &str, sku: &str) -> Result<commands::CmdResult> {
        commands::add_product::run(&mut self.store, name, sku)
    }

    pub fn add_warehouse(&mut self, id: u32, stock_limit: Option<u32>) -> Result<commands::CmdResult> {
        commands::add_warehouse::run(&mut self.store, id, stock_limit)
    }

    pub fn stock(&mut self, sku: &str, id: u32, quantity: u32) -> Result<commands::CmdResult> {
        commands::stock::run(&mut self.store, sku, id, quantity)
    }

    pub fn unstock(&mut self, sku: &str, id: u32, quantity: u32) -> Result<commands::CmdResult> {
        commands::unstock::run(&mut self.store, sku, id, quantity)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list_products::run(&self.store)
    }

    pub fn list_warehouses(&self) -> Result<commands::CmdResult> {
        commands::list_warehouses::run(&self.store)
    }

    pub fn list_warehouse(&self, id: u32) -> Result<commands::CmdResult> {
        commands::list_warehouse::run(&self.store, id)
    }
}

pub use commands::{CatalogEntry, CmdResult, StockLine, WarehouseSummary};
