use clap::Parser;
use colored::*;
use depot::api::{CatalogEntry, DepotApi, StockLine, WarehouseSummary};
use depot::error::Result;
use depot::prompt::{
    parse_quantity, parse_stock_limit, parse_warehouse_id, require_text, PromptSource, StdinPrompt,
};
use depot::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DepotApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context();
    let mut input = StdinPrompt::new();

    let outcome = match cli.command {
        Commands::AddProduct => handle_add_product(&mut ctx, &mut input),
        Commands::AddWarehouse => handle_add_warehouse(&mut ctx, &mut input),
        Commands::Stock => handle_stock(&mut ctx, &mut input),
        Commands::Unstock => handle_unstock(&mut ctx, &mut input),
        Commands::ListProducts => handle_list_products(&ctx),
        Commands::ListWarehouses => handle_list_warehouses(&ctx),
        Commands::ListWarehouse => handle_list_warehouse(&ctx, &mut input),
    };

    match outcome {
        // Bad answers and missing entities are reported, not fatal: the
        // document is left as it was and the process exits cleanly.
        Err(e) if e.is_user_error() => {
            eprintln!("{}", e.to_string().red());
            Ok(())
        }
        other => other,
    }
}

fn init_context() -> AppContext {
    let db_path = match std::env::var_os("DEPOT_DB") {
        Some(path) => PathBuf::from(path),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "depot", "depot").expect("Could not determine data dir");
            proj_dirs.data_dir().join("inventory.json")
        }
    };

    AppContext {
        api: DepotApi::new(FileStore::new(db_path)),
    }
}

fn handle_add_product(ctx: &mut AppContext, input: &mut impl PromptSource) -> Result<()> {
    let name = require_text(
        "product name",
        input.ask("type in the name of the product you want to add")?,
    )?;
    let sku = require_text(
        "SKU",
        input.ask("now type in the SKU of the product you want to add")?,
    )?;

    ctx.api.add_product(&name, &sku)?;
    Ok(())
}

fn handle_add_warehouse(ctx: &mut AppContext, input: &mut impl PromptSource) -> Result<()> {
    let id = parse_warehouse_id(&input.ask("type in the id of the warehouse you want to add")?)?;
    let stock_limit = parse_stock_limit(&input.ask(
        "type in the stock limit of the warehouse you want to add or press enter for no limit",
    )?);

    ctx.api.add_warehouse(id, stock_limit)?;
    Ok(())
}

fn handle_stock(ctx: &mut AppContext, input: &mut impl PromptSource) -> Result<()> {
    let sku = require_text(
        "SKU",
        input.ask("type in the SKU of the product you want to stock")?,
    )?;
    let id = parse_warehouse_id(
        &input.ask("type in the id of the warehouse you want to stock product(s) in")?,
    )?;
    let quantity =
        parse_quantity(&input.ask("type in the quantity of the product you want to stock")?)?;

    ctx.api.stock(&sku, id, quantity)?;
    Ok(())
}

fn handle_unstock(ctx: &mut AppContext, input: &mut impl PromptSource) -> Result<()> {
    let sku = require_text(
        "SKU",
        input.ask("type in the SKU of the product you want to unstock")?,
    )?;
    let id = parse_warehouse_id(
        &input.ask("type in the id of the warehouse you want to unstock product(s) from")?,
    )?;
    let quantity =
        parse_quantity(&input.ask("type in the quantity of the product you want to unstock")?)?;

    ctx.api.unstock(&sku, id, quantity)?;
    Ok(())
}

fn handle_list_products(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_catalog(&result.catalog);
    Ok(())
}

fn handle_list_warehouses(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_warehouses()?;
    print_warehouses(&result.warehouses);
    Ok(())
}

fn handle_list_warehouse(ctx: &AppContext, input: &mut impl PromptSource) -> Result<()> {
    let id = parse_warehouse_id(&input.ask("type in the id of the warehouse you want to view")?)?;

    let result = ctx.api.list_warehouse(id)?;
    print_stock(&result.stock);
    Ok(())
}

fn print_catalog(entries: &[CatalogEntry]) {
    for entry in entries {
        println!("{} - {}", entry.sku, entry.name);
    }
}

fn print_warehouses(warehouses: &[WarehouseSummary]) {
    println!("WAREHOUSES");
    for warehouse in warehouses {
        let limit = match warehouse.stock_limit {
            Some(limit) => limit.to_string(),
            None => "unlimited".to_string(),
        };
        println!("Warehouse #{} with stock limit of {}", warehouse.id, limit);
    }
}

fn print_stock(lines: &[StockLine]) {
    for line in lines {
        println!();
        println!("Item name: {}", line.name.as_deref().unwrap_or("(unknown)"));
        println!("Item SKU: {}", line.sku);
        println!("QTY: {}", line.quantity);
    }
}
