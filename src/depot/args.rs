use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(about = "Interactive command-line inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// Commands take their arguments interactively, one prompt at a time, so
// none of the variants carry positional args.
#[derive(Subcommand, Debug)]
#[command(rename_all = "snake_case")]
pub enum Commands {
    /// Add a new product to the product catalog
    AddProduct,

    /// Create a new warehouse where products can be stocked
    AddWarehouse,

    /// Stock a quantity of a product in a warehouse
    Stock,

    /// Unstock a quantity of a product from a warehouse
    Unstock,

    /// List all products in the product catalog
    ListProducts,

    /// List all warehouses
    ListWarehouses,

    /// List every product stocked in one warehouse
    ListWarehouse,
}
