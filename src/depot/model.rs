use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole persisted document: the product catalog plus every warehouse.
///
/// Loaded fully into memory at the start of an operation and written back
/// whole after a successful mutation. `Default` is the initialized empty
/// state, with both maps present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// The catalog: product name keyed by SKU.
    pub products: BTreeMap<String, String>,
    pub warehouses: BTreeMap<u32, Warehouse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    /// How much stock this warehouse is meant to hold; `None` means
    /// unlimited. Informational only: stocking past the limit is allowed.
    pub stock_limit: Option<u32>,
    // A hand-edited document may omit the map; stocking recreates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<BTreeMap<String, StockEntry>>,
}

impl Warehouse {
    pub fn new(stock_limit: Option<u32>) -> Self {
        Self {
            stock_limit,
            products: Some(BTreeMap::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_wire_layout() {
        let mut inventory = Inventory::default();
        inventory
            .products
            .insert("W1".to_string(), "Widget".to_string());
        let mut warehouse = Warehouse::new(Some(10));
        warehouse
            .products
            .as_mut()
            .unwrap()
            .insert("W1".to_string(), StockEntry { quantity: 5 });
        inventory.warehouses.insert(1, warehouse);
        inventory.warehouses.insert(2, Warehouse::new(None));

        let value = serde_json::to_value(&inventory).unwrap();
        assert_eq!(
            value,
            json!({
                "products": { "W1": "Widget" },
                "warehouses": {
                    "1": { "stockLimit": 10, "products": { "W1": { "quantity": 5 } } },
                    "2": { "stockLimit": null, "products": {} },
                }
            })
        );
    }

    #[test]
    fn missing_products_map_deserializes_as_none() {
        let inventory: Inventory = serde_json::from_str(
            r#"{ "products": {}, "warehouses": { "7": { "stockLimit": null } } }"#,
        )
        .unwrap();

        assert_eq!(inventory.warehouses[&7].products, None);
    }
}
