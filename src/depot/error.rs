use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepotError {
    #[error("Invalid {field}: expected {expected}, got \"{provided}\"")]
    Validation {
        field: &'static str,
        expected: &'static str,
        provided: String,
    },

    #[error("Product {0} already exists")]
    DuplicateProduct(String),

    #[error("Warehouse {0} already exists")]
    DuplicateWarehouse(u32),

    #[error("Warehouse {0} does not exist")]
    WarehouseNotFound(u32),

    #[error("Warehouse {0} has no products")]
    NoStock(u32),

    #[error("Product {sku} does not exist in warehouse {warehouse}")]
    ProductNotStocked { sku: String, warehouse: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl DepotError {
    /// Whether the error came from user input (bad answer, duplicate or
    /// missing entity) rather than from storage plumbing.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DepotError::Validation { .. }
                | DepotError::DuplicateProduct(_)
                | DepotError::DuplicateWarehouse(_)
                | DepotError::WarehouseNotFound(_)
                | DepotError::NoStock(_)
                | DepotError::ProductNotStocked { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DepotError>;
