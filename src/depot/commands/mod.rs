pub mod add_product;
pub mod add_warehouse;
pub mod list_products;
pub mod list_warehouse;
pub mod list_warehouses;
pub mod stock;
pub mod unstock;

/// One catalog line: a SKU and the product name registered under it.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub sku: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct WarehouseSummary {
    pub id: u32,
    pub stock_limit: Option<u32>,
}

/// One stocked item inside a warehouse.
#[derive(Debug, Clone)]
pub struct StockLine {
    pub sku: String,
    /// Catalog name for the SKU; `None` when the SKU was never cataloged.
    pub name: Option<String>,
    pub quantity: u32,
}

/// Structured outcome of a command, formatted by the CLI layer.
///
/// Mutating commands return the default (empty) result: success is
/// silent, and failure is reported through the error type.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub catalog: Vec<CatalogEntry>,
    pub warehouses: Vec<WarehouseSummary>,
    pub stock: Vec<StockLine>,
}

impl CmdResult {
    pub fn with_catalog(mut self, entries: Vec<CatalogEntry>) -> Self {
        self.catalog = entries;
        self
    }

    pub fn with_warehouses(mut self, warehouses: Vec<WarehouseSummary>) -> Self {
        self.warehouses = warehouses;
        self
    }

    pub fn with_stock(mut self, stock: Vec<StockLine>) -> Self {
        self.stock = stock;
        self
    }
}
